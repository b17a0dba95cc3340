//! Trade Console layout persistence library
//!
//! This crate manages the persisted, resizable grid layouts of the Trade
//! Console UI: which widgets appear on the trading and dashboard screens and
//! where they sit, plus migration and self-healing repair of previously
//! stored layout data. Rendering and drag/resize interaction live in the UI
//! layer; it consumes the layout sets produced here.
//!
//! # Startup sequence
//!
//! 1. Open storage and run [`migrate_legacy_layout`] once, before anything
//!    reads layout state.
//! 2. Hydrate a [`LayoutStore`] with [`LayoutStore::load`]; malformed or
//!    outdated persisted data is silently replaced by the built-in defaults.
//! 3. Hand the store to the rendering collaborator; it resolves individual
//!    cells via [`LayoutSet::placement`] and calls [`LayoutStore::save`]
//!    after edits.
//!
//! # Example
//!
//! ```
//! use trade_console_layout::{migrate_legacy_layout, LayoutStore, MemoryStorage, TradeWidget};
//!
//! let mut storage = MemoryStorage::new();
//! migrate_legacy_layout(&mut storage);
//!
//! let mut store = LayoutStore::load(&storage);
//! let cell = store.trading_layout().placement(TradeWidget::ChartView);
//! assert!(cell.w > 0);
//!
//! store.set_layout_locked(false);
//! store.save(&mut storage);
//! ```

/// Storage error types.
pub mod error;

/// Grid layout model: catalog, placements, repair, store.
pub mod layout;

/// Key-value persistence and legacy migration.
pub mod storage;

pub use error::StorageError;
pub use layout::catalog::{DashboardWidget, TradeWidget, UnknownWidgetId};
pub use layout::grid::{LayoutSet, Placement};
pub use layout::repair::{check_layout, repair_layout, InvalidReason, Validity};
pub use layout::store::LayoutStore;
pub use storage::{migrate_legacy_layout, FileStorage, KeyValueStorage, MemoryStorage};
