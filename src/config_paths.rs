//! Paths used by commit-editor
//!
//! There is no configuration file; the only thing stored on disk besides
//! the message itself is the log output:
//! - Unix/macOS: `~/.config/commit-editor/logs/`
//! - Windows: `%APPDATA%\commit-editor\logs\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "commit-editor";

/// Prefix of the daily-rotated log files (`commit-editor.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "commit-editor.log";

/// Base directory for commit-editor
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/commit-editor`
///   - Else: `~/.config/commit-editor`
///
/// Windows:
///   - `%APPDATA%\commit-editor`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/commit-editor/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
