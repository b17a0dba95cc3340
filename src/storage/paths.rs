//! Platform-aware path resolution for the layout storage file.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! `$XDG_CONFIG_HOME/trade-console` or `~/.config/trade-console`.
//!
//! On **macOS**, uses Apple conventions with an XDG env var override:
//! `$XDG_CONFIG_HOME/trade-console` or
//! `~/Library/Application Support/trade-console`.

use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "trade-console";
const STORAGE_FILE: &str = "layout.json";

/// Returns the configuration directory for trade-console.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/trade-console` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/trade-console`
///    - macOS: `~/Library/Application Support/trade-console`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    platform_config_dir().join(APP_DIR)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support
        dirs::config_dir().expect("could not determine config directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        // ~/.config (XDG default on Linux)
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".config")
    }
}

/// Returns the path to the layout storage file.
///
/// Resolves to `config_dir()/layout.json`.
pub fn storage_path() -> PathBuf {
    config_dir().join(STORAGE_FILE)
}

/// Creates a directory and all parent directories.
///
/// Equivalent to `mkdir -p`.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serialize tests that mutate environment variables.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Run a closure with `XDG_CONFIG_HOME` temporarily set, then restore.
    fn with_xdg_config<F: FnOnce()>(value: Option<&str>, f: F) {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        match value {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        f();
        match original {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    #[test]
    fn xdg_config_home_overrides_platform_default() {
        with_xdg_config(Some("/custom/config"), || {
            assert_eq!(config_dir(), PathBuf::from("/custom/config/trade-console"));
            assert_eq!(
                storage_path(),
                PathBuf::from("/custom/config/trade-console/layout.json")
            );
        });
    }

    #[test]
    fn without_xdg_override_path_ends_with_app_dir() {
        with_xdg_config(None, || {
            assert!(config_dir().ends_with(APP_DIR));
        });
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).expect("should create nested dirs");
        assert!(nested.is_dir());
        // Idempotent on an existing directory.
        ensure_dir(&nested).expect("existing dir is fine");
    }
}
