//! Grid layout model for the trading and dashboard screens.
//!
//! The catalog supplies widget identifiers and built-in default layouts, the
//! grid module the placement primitives, the repair module the self-healing
//! validation applied to persisted data, and the store the stateful holder
//! handed to the rendering collaborator.

pub mod catalog;
pub mod grid;
pub mod repair;
pub mod store;

pub use catalog::{DashboardWidget, TradeWidget, UnknownWidgetId};
pub use grid::{LayoutSet, Placement};
pub use repair::{check_layout, repair_layout, InvalidReason, Validity};
pub use store::LayoutStore;
