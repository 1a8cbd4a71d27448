//! Centralized path definitions for rewrex
//!
//! ## Config lookup
//!
//! ```text
//! --config FILE                 # explicit, always wins
//! ./rewrex.toml                 # project config
//! ~/.rewrex/config.toml         # user config
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const PROJECT_CONFIG: &str = "rewrex.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".rewrex";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project config in `dir`
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG)
}

/// Get the global rewrex directory.
///
/// Returns `~/.rewrex/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.rewrex/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
