//! Widget identifiers and built-in default layouts.
//!
//! Two disjoint namespaces exist, one per screen: [`TradeWidget`] for the
//! trading view and [`DashboardWidget`] for the dashboard view. Identifiers
//! are stable integers; persisted layouts reference them by raw value, so a
//! discriminant must never be reused for a different widget.
//!
//! Each namespace ships two built-in layouts: a full-viewport default and a
//! compact variant for narrow screens. Compact layouts still list every
//! widget, collapsing hidden ones to zero height. The constructors return
//! fresh values on every call, so a handed-out layout can be mutated freely
//! without affecting the built-in defaults.

use serde::{Deserialize, Serialize};

use super::grid::{LayoutSet, Placement};

/// Error produced when a stored integer does not name a known widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown widget id {0}")]
pub struct UnknownWidgetId(pub u8);

// ---------------------------------------------------------------------------
// Trading namespace
// ---------------------------------------------------------------------------

/// Widgets available on the trading view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TradeWidget {
    /// Combined pair list / controls pane.
    MultiPane = 0,
    /// Currently open trades table.
    OpenTrades = 1,
    /// Closed trades history table.
    TradeHistory = 2,
    /// Detail panel for the selected trade.
    TradeDetail = 3,
    /// Candlestick chart pane.
    ChartView = 4,
}

impl TradeWidget {
    /// All trading widgets in stable identifier order.
    pub const ALL: [TradeWidget; 5] = [
        TradeWidget::MultiPane,
        TradeWidget::OpenTrades,
        TradeWidget::TradeHistory,
        TradeWidget::TradeDetail,
        TradeWidget::ChartView,
    ];
}

impl From<TradeWidget> for u8 {
    fn from(widget: TradeWidget) -> Self {
        widget as u8
    }
}

impl TryFrom<u8> for TradeWidget {
    type Error = UnknownWidgetId;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(TradeWidget::MultiPane),
            1 => Ok(TradeWidget::OpenTrades),
            2 => Ok(TradeWidget::TradeHistory),
            3 => Ok(TradeWidget::TradeDetail),
            4 => Ok(TradeWidget::ChartView),
            other => Err(UnknownWidgetId(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard namespace
// ---------------------------------------------------------------------------

/// Widgets available on the dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DashboardWidget {
    /// Daily profit bar chart.
    DailyChart = 0,
    /// Per-bot performance comparison table.
    BotComparison = 1,
    /// Open trades across all bots.
    AllOpenTrades = 2,
    /// Cumulative profit chart.
    CumProfitChart = 3,
    /// Closed trades across all bots.
    AllClosedTrades = 4,
    /// Profit distribution histogram.
    ProfitDistributionChart = 5,
    /// Trades-per-day log chart.
    TradesLogChart = 6,
}

impl DashboardWidget {
    /// All dashboard widgets in stable identifier order.
    pub const ALL: [DashboardWidget; 7] = [
        DashboardWidget::DailyChart,
        DashboardWidget::BotComparison,
        DashboardWidget::AllOpenTrades,
        DashboardWidget::CumProfitChart,
        DashboardWidget::AllClosedTrades,
        DashboardWidget::ProfitDistributionChart,
        DashboardWidget::TradesLogChart,
    ];
}

impl From<DashboardWidget> for u8 {
    fn from(widget: DashboardWidget) -> Self {
        widget as u8
    }
}

impl TryFrom<u8> for DashboardWidget {
    type Error = UnknownWidgetId;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(DashboardWidget::DailyChart),
            1 => Ok(DashboardWidget::BotComparison),
            2 => Ok(DashboardWidget::AllOpenTrades),
            3 => Ok(DashboardWidget::CumProfitChart),
            4 => Ok(DashboardWidget::AllClosedTrades),
            5 => Ok(DashboardWidget::ProfitDistributionChart),
            6 => Ok(DashboardWidget::TradesLogChart),
            other => Err(UnknownWidgetId(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in layouts
// ---------------------------------------------------------------------------

/// Full-viewport trading layout: pair pane on the left, chart and trade
/// tables stacked on the right.
pub fn default_trading_layout() -> LayoutSet<TradeWidget> {
    LayoutSet::new(vec![
        Placement::new(TradeWidget::MultiPane, 0, 0, 3, 35),
        Placement::new(TradeWidget::ChartView, 3, 0, 9, 14),
        Placement::new(TradeWidget::TradeDetail, 3, 19, 9, 6),
        Placement::new(TradeWidget::OpenTrades, 3, 14, 9, 5),
        Placement::new(TradeWidget::TradeHistory, 3, 25, 9, 10),
    ])
}

/// Compact trading layout: only the multi pane is visible, everything else
/// collapses to zero height.
pub fn compact_trading_layout() -> LayoutSet<TradeWidget> {
    LayoutSet::new(vec![
        Placement::new(TradeWidget::MultiPane, 0, 0, 12, 10),
        Placement::new(TradeWidget::ChartView, 0, 10, 12, 0),
        Placement::new(TradeWidget::TradeDetail, 0, 19, 12, 0),
        Placement::new(TradeWidget::OpenTrades, 0, 8, 12, 0),
        Placement::new(TradeWidget::TradeHistory, 0, 25, 12, 0),
    ])
}

/// Full-viewport dashboard layout: three rows of paired tables and charts.
pub fn default_dashboard_layout() -> LayoutSet<DashboardWidget> {
    LayoutSet::new(vec![
        Placement::new(DashboardWidget::BotComparison, 0, 0, 8, 6),
        Placement::new(DashboardWidget::DailyChart, 8, 0, 4, 6),
        Placement::new(DashboardWidget::AllOpenTrades, 0, 6, 8, 6),
        Placement::new(DashboardWidget::CumProfitChart, 8, 6, 4, 6),
        Placement::new(DashboardWidget::AllClosedTrades, 0, 12, 8, 6),
        Placement::new(DashboardWidget::ProfitDistributionChart, 8, 12, 4, 6),
        Placement::new(DashboardWidget::TradesLogChart, 0, 18, 12, 4),
    ])
}

/// Compact dashboard layout: every widget full-width, stacked vertically.
pub fn compact_dashboard_layout() -> LayoutSet<DashboardWidget> {
    LayoutSet::new(vec![
        Placement::new(DashboardWidget::BotComparison, 0, 0, 12, 6),
        Placement::new(DashboardWidget::AllOpenTrades, 0, 6, 12, 8),
        Placement::new(DashboardWidget::DailyChart, 0, 14, 12, 6),
        Placement::new(DashboardWidget::CumProfitChart, 0, 20, 12, 6),
        Placement::new(DashboardWidget::ProfitDistributionChart, 0, 26, 12, 6),
        Placement::new(DashboardWidget::TradesLogChart, 0, 32, 12, 4),
        Placement::new(DashboardWidget::AllClosedTrades, 0, 36, 12, 8),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids<W: Copy + Into<u8>>(layout: &LayoutSet<W>) -> Vec<u8> {
        layout.iter().map(|cell| cell.id.into()).collect()
    }

    // -----------------------------------------------------------------------
    // Namespace coverage
    // -----------------------------------------------------------------------

    #[test]
    fn trading_defaults_cover_every_widget_exactly_once() {
        for layout in [default_trading_layout(), compact_trading_layout()] {
            let seen: HashSet<u8> = ids(&layout).into_iter().collect();
            assert_eq!(layout.len(), TradeWidget::ALL.len());
            assert_eq!(seen.len(), TradeWidget::ALL.len());
        }
    }

    #[test]
    fn dashboard_defaults_cover_every_widget_exactly_once() {
        for layout in [default_dashboard_layout(), compact_dashboard_layout()] {
            let seen: HashSet<u8> = ids(&layout).into_iter().collect();
            assert_eq!(layout.len(), DashboardWidget::ALL.len());
            assert_eq!(seen.len(), DashboardWidget::ALL.len());
        }
    }

    #[test]
    fn full_viewport_defaults_have_positive_dimensions() {
        for cell in default_trading_layout().iter() {
            assert!(cell.w > 0 && cell.h > 0, "degenerate cell for {:?}", cell.id);
        }
        for cell in default_dashboard_layout().iter() {
            assert!(cell.w > 0 && cell.h > 0, "degenerate cell for {:?}", cell.id);
        }
    }

    #[test]
    fn compact_trading_layout_collapses_all_but_multi_pane() {
        let layout = compact_trading_layout();
        for cell in layout.iter() {
            if cell.id == TradeWidget::MultiPane {
                assert!(cell.h > 0);
            } else {
                assert_eq!(cell.h, 0, "{:?} should be collapsed", cell.id);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Wire identifiers
    // -----------------------------------------------------------------------

    #[test]
    fn widget_ids_round_trip_through_raw_integers() {
        for widget in TradeWidget::ALL {
            assert_eq!(TradeWidget::try_from(u8::from(widget)), Ok(widget));
        }
        for widget in DashboardWidget::ALL {
            assert_eq!(DashboardWidget::try_from(u8::from(widget)), Ok(widget));
        }
    }

    #[test]
    fn unknown_raw_id_is_rejected() {
        assert_eq!(TradeWidget::try_from(5), Err(UnknownWidgetId(5)));
        assert_eq!(DashboardWidget::try_from(7), Err(UnknownWidgetId(7)));
    }

    #[test]
    fn widget_ids_serialize_as_integers() {
        let json = serde_json::to_string(&DashboardWidget::TradesLogChart)
            .expect("widget id serializes");
        assert_eq!(json, "6");
    }

    #[test]
    fn string_widget_id_fails_to_deserialize() {
        let result: Result<TradeWidget, _> = serde_json::from_str(r#""multiPane""#);
        assert!(result.is_err());
    }

    #[test]
    fn mutating_a_returned_layout_leaves_the_default_pristine() {
        let mut handed_out = default_dashboard_layout();
        for cell in handed_out.iter_mut() {
            cell.x = 99;
            cell.h = 0;
        }
        assert_ne!(handed_out, default_dashboard_layout());
        assert_eq!(default_dashboard_layout(), default_dashboard_layout());
    }
}
