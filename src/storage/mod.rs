//! Key-value persistence for layout settings.
//!
//! Layout state was historically persisted under browser-style string keys,
//! and this module keeps that contract: a flat, string-valued key-value
//! surface behind the [`KeyValueStorage`] trait. Two implementations ship:
//! [`MemoryStorage`] for tests and embedders that persist elsewhere, and
//! [`FileStorage`] backed by a JSON file in the platform config directory.

pub mod file;
pub mod migrate;
pub mod paths;

pub use file::FileStorage;
pub use migrate::migrate_legacy_layout;

use std::collections::HashMap;

/// Unified storage key holding the JSON-encoded layout settings blob.
pub const LAYOUT_SETTINGS_KEY: &str = "ftLayoutSettings";

/// Legacy key for the dashboard layout, superseded by [`LAYOUT_SETTINGS_KEY`].
pub const LEGACY_DASHBOARD_KEY: &str = "ftDashboardLayout";

/// Legacy key for the trading layout, superseded by [`LAYOUT_SETTINGS_KEY`].
pub const LEGACY_TRADING_KEY: &str = "ftTradingLayout";

/// Legacy key for the edit-lock flag, superseded by [`LAYOUT_SETTINGS_KEY`].
pub const LEGACY_LOCK_KEY: &str = "ftLayoutLocked";

/// String-valued key-value storage.
///
/// All operations are synchronous and infallible at this surface; file-backed
/// implementations handle I/O problems internally (best-effort, logged).
pub trait KeyValueStorage {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Removes `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);
}

/// Transient in-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
