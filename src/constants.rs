//! Global application constants.

use std::time::Duration;

/// Whether this is a debug build.
pub const DEBUG: bool = cfg!(debug_assertions);

/// The application window title.
pub const WINDOW_TITLE: &str = "Video Manager";

/// The name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// The duration of time to wait before saving the configuration file.
pub const SAVE_CONFIG_SLEEP_DURATION: Duration = Duration::from_secs(2);

/// The time an alert or toast stays fully visible before it starts fading.
pub const AUTO_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// The time a fading alert or toast takes to disappear.
pub const FADE_OUT_DURATION: Duration = Duration::from_millis(500);

/// The window width below which the sidebar collapses behind a toggle
/// button.
pub const SIDEBAR_BREAKPOINT: f64 = 768.0;

/// The loading message used when the caller does not provide one.
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading…";

/// File extensions recognized as video files.
pub const VIDEO_EXTENSIONS: [&str; 10] = [
    "mp4", "mkv", "avi", "wmv", "mov", "flv", "rmvb", "rm", "3gp", "m4v",
];
