// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

/// Feeds the upload stages into the side panel's progress bar and the
/// export bar's status line.
pub struct GuiProgress {
    progress: Arc<Mutex<Option<(f32, String)>>>,
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(
        progress: Arc<Mutex<Option<(f32, String)>>>,
        status: Arc<Mutex<String>>,
    ) -> Self {
        Self { progress, status }
    }
}

impl Progress for GuiProgress {
    fn stage(&mut self, percent: u8, msg: &str) {
        *self.progress.lock().unwrap() = Some((percent as f32 / 100.0, s!(msg)));
        *self.status.lock().unwrap() = s!(msg);
    }

    fn finish(&mut self) {
        // Leave the last stage visible; the next parse overwrites it and
        // the error path clears it.
    }
}
