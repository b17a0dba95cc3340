//! One-time migration from legacy per-concern storage keys.
//!
//! Installations predating the unified layout blob persisted three separate
//! values: the dashboard layout, the trading layout, and the edit-lock flag,
//! each under its own key. [`migrate_legacy_layout`] consolidates them into
//! the unified key and deletes the obsolete entries. It runs at process
//! startup, before any component reads layout state.

use serde::Serialize;

use crate::storage::{
    KeyValueStorage, LAYOUT_SETTINGS_KEY, LEGACY_DASHBOARD_KEY, LEGACY_LOCK_KEY,
    LEGACY_TRADING_KEY,
};

/// Unified blob assembled from the raw legacy values.
///
/// Field order is part of the stored format and must stay
/// dashboardLayout, tradingLayout, layoutLocked.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LegacySnapshot {
    dashboard_layout: Option<String>,
    trading_layout: Option<String>,
    layout_locked: Option<String>,
}

/// Consolidates legacy per-concern keys into the unified layout settings key,
/// then deletes the legacy keys.
///
/// The presence of the legacy dashboard key marks a legacy installation; in
/// that case all three legacy values (absent ones become JSON `null`) are
/// carried over **verbatim, without re-parsing their JSON content**, so the
/// layout fields end up as strings containing the old blobs, which
/// the repair pass in [`LayoutStore::load`](crate::LayoutStore::load) heals on
/// the next load. A pre-existing unified entry is overwritten; that data-loss
/// window is an accepted property of the one-shot conversion, not a bug.
///
/// Best-effort and idempotent: no error is ever surfaced, and a second run
/// with no legacy keys present only repeats the harmless deletions.
pub fn migrate_legacy_layout(storage: &mut dyn KeyValueStorage) {
    if let Some(dashboard_layout) = storage.get(LEGACY_DASHBOARD_KEY) {
        tracing::info!("migrating legacy layout settings");
        let snapshot = LegacySnapshot {
            dashboard_layout: Some(dashboard_layout),
            trading_layout: storage.get(LEGACY_TRADING_KEY),
            layout_locked: storage.get(LEGACY_LOCK_KEY),
        };
        match serde_json::to_string(&snapshot) {
            Ok(blob) => storage.set(LAYOUT_SETTINGS_KEY, blob),
            Err(err) => tracing::warn!("could not assemble migrated layout settings: {err}"),
        }
    }
    storage.remove(LEGACY_LOCK_KEY);
    storage.remove(LEGACY_TRADING_KEY);
    storage.remove(LEGACY_DASHBOARD_KEY);
}
