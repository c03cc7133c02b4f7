/// Utility functions used throughout the application
use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("banktui-debug.log");
    path
}
