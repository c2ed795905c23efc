// src/config/consts.rs

// Service
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

// Upload validation
pub const SAV_EXTENSION: &str = "sav";
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

// Display
pub const PREVIEW_ROWS: usize = 10;

// Local settings
pub const STORE_DIR: &str = ".store";
pub const SETTINGS_FILE: &str = "settings.json";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "spss_data";
