//! The stateful holder of the active grid layouts.
//!
//! One [`LayoutStore`] is constructed at application start and handed to the
//! rendering collaborator. Persistence is explicit: [`LayoutStore::load`]
//! hydrates from storage (running the repair pass), and the embedder calls
//! [`LayoutStore::save`] after mutating tracked state. All operations are
//! synchronous and total; malformed persisted data is the only failure mode,
//! and it is silently repaired.

use serde::Serialize;
use serde_json::Value;

use crate::layout::catalog::{self, DashboardWidget, TradeWidget};
use crate::layout::grid::LayoutSet;
use crate::layout::repair::repair_layout;
use crate::storage::{KeyValueStorage, LAYOUT_SETTINGS_KEY};

/// Wire shape of the unified persisted blob.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState<'a> {
    dashboard_layout: &'a LayoutSet<DashboardWidget>,
    trading_layout: &'a LayoutSet<TradeWidget>,
    layout_locked: bool,
}

/// In-memory holder of the active grid layouts and the UI edit lock.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStore {
    dashboard_layout: LayoutSet<DashboardWidget>,
    trading_layout: LayoutSet<TradeWidget>,
    layout_locked: bool,
}

impl Default for LayoutStore {
    /// Full-viewport defaults for both screens, with editing locked.
    fn default() -> Self {
        Self {
            dashboard_layout: catalog::default_dashboard_layout(),
            trading_layout: catalog::default_trading_layout(),
            layout_locked: true,
        }
    }
}

impl LayoutStore {
    /// Hydrates a store from persisted storage, repairing as needed.
    ///
    /// An absent or unparsable unified blob yields the default store. An
    /// object blob has each layout field checked and, where unusable,
    /// replaced by its full-viewport default (see
    /// [`repair_layout`](crate::layout::repair::repair_layout) for the
    /// rejection rules). Never fails.
    pub fn load(storage: &dyn KeyValueStorage) -> Self {
        let Some(raw) = storage.get(LAYOUT_SETTINGS_KEY) else {
            return Self::default();
        };
        let root: Value = match serde_json::from_str(&raw) {
            Ok(root) => root,
            Err(err) => {
                tracing::debug!("stored layout settings do not parse, using defaults: {err}");
                return Self::default();
            }
        };

        let dashboard = root.get("dashboardLayout").cloned().unwrap_or(Value::Null);
        let trading = root.get("tradingLayout").cloned().unwrap_or(Value::Null);
        Self {
            dashboard_layout: repair_layout(
                &dashboard,
                catalog::default_dashboard_layout(),
                "dashboard",
            ),
            trading_layout: repair_layout(&trading, catalog::default_trading_layout(), "trading"),
            layout_locked: locked_flag(root.get("layoutLocked")),
        }
    }

    /// Serializes the unified state under the layout settings key.
    pub fn save(&self, storage: &mut dyn KeyValueStorage) {
        let state = PersistedState {
            dashboard_layout: &self.dashboard_layout,
            trading_layout: &self.trading_layout,
            layout_locked: self.layout_locked,
        };
        match serde_json::to_string(&state) {
            Ok(blob) => storage.set(LAYOUT_SETTINGS_KEY, blob),
            Err(err) => tracing::warn!("could not serialize layout settings: {err}"),
        }
    }

    /// The active dashboard layout.
    pub fn dashboard_layout(&self) -> &LayoutSet<DashboardWidget> {
        &self.dashboard_layout
    }

    /// The active trading layout.
    pub fn trading_layout(&self) -> &LayoutSet<TradeWidget> {
        &self.trading_layout
    }

    /// Replaces the dashboard layout after drag/resize edits.
    pub fn set_dashboard_layout(&mut self, layout: LayoutSet<DashboardWidget>) {
        self.dashboard_layout = layout;
    }

    /// Replaces the trading layout after drag/resize edits.
    pub fn set_trading_layout(&mut self, layout: LayoutSet<TradeWidget>) {
        self.trading_layout = layout;
    }

    /// Whether grid editing is locked in the UI.
    ///
    /// This is a user-facing edit lock, not a concurrency primitive.
    pub fn layout_locked(&self) -> bool {
        self.layout_locked
    }

    /// Sets the UI edit lock.
    pub fn set_layout_locked(&mut self, locked: bool) {
        self.layout_locked = locked;
    }

    /// Restores the dashboard layout to its full-viewport default. Idempotent.
    pub fn reset_dashboard_layout(&mut self) {
        self.dashboard_layout = catalog::default_dashboard_layout();
    }

    /// Restores the trading layout to its full-viewport default. Idempotent.
    pub fn reset_trading_layout(&mut self) {
        self.trading_layout = catalog::default_trading_layout();
    }

    /// A fresh copy of the compact dashboard layout for narrow viewports.
    pub fn compact_dashboard_layout(&self) -> LayoutSet<DashboardWidget> {
        catalog::compact_dashboard_layout()
    }

    /// A fresh copy of the compact trading layout for narrow viewports.
    pub fn compact_trading_layout(&self) -> LayoutSet<TradeWidget> {
        catalog::compact_trading_layout()
    }
}

/// Lenient read of the persisted edit-lock flag.
///
/// Accepts a JSON bool, or a string containing `true`/`false` as produced by
/// the legacy migration's verbatim carry-over. Anything else falls back to
/// locked, the safe default.
fn locked_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(locked)) => *locked,
        Some(Value::String(raw)) => raw.trim().parse().unwrap_or(true),
        _ => true,
    }
}
