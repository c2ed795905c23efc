// src/progress.rs
/// Lightweight progress reporting for the upload-and-parse flow.
/// Frontends (GUI/CLI) implement this to surface status to users.
///
/// The flow is staged, not per-item: the client makes one sequential
/// request and only knows coarse milestones (upload sent, response
/// received, payload decoded).
pub trait Progress {
    /// A milestone was reached. `percent` is 0..=100.
    fn stage(&mut self, _percent: u8, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
