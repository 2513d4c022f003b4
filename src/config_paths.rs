//! Where mosaic keeps its files
//!
//! Resolution order for the base directory:
//! 1. `MOSAIC_CONFIG_DIR`, used as-is
//! 2. `$XDG_CONFIG_HOME/mosaic` (Unix/macOS)
//! 3. `~/.config/mosaic` (Unix/macOS) or `%APPDATA%\mosaic` (Windows)

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "mosaic";
const OVERRIDE_VAR: &str = "MOSAIC_CONFIG_DIR";

/// Base directory for the config file and logs
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(OVERRIDE_VAR).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    #[cfg(target_os = "windows")]
    let base = dirs::config_dir();

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|b| b.join(APP_DIR))
}

/// `<config dir>/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Create `<config dir>/logs/` if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = config_dir()
        .map(|dir| dir.join("logs"))
        .ok_or_else(|| "no home or config directory to put logs in".to_string())?;
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("cannot create {}: {}", logs.display(), e))?;
    Ok(logs)
}
