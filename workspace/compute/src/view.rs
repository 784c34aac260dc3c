//! Ephemeral UI selection state.
//!
//! The whole per-session state of the dashboard is this one immutable value;
//! it is threaded through the derivations and replaced (never mutated in
//! place) via the named transitions below. It has no persistence and no
//! lifecycle beyond the page session.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sort column of the stock table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Expected 7-day return
    #[default]
    Prediction,
    /// 7-day volatility
    Volatility,
    /// Composite selection score
    Confidence,
    /// 7-day cumulative return
    Cumulative,
    /// Last known historical return
    LastReturn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Tab strip of the dashboard. Defaults to the first tab; any tab is
/// reachable from any tab, there are no transition guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Overview,
    Stocks,
    Trends,
    Analysis,
    Recommendations,
}

/// Display mode of the stock list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
    Chart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The complete UI selection, as one value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub search: String,
    pub sort_by: SortKey,
    pub order: SortOrder,
    pub active_tab: Tab,
    pub selected: Option<String>,
    pub view_mode: ViewMode,
    pub theme: Theme,
}

impl ViewState {
    pub fn set_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn set_sort_key(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn set_sort_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn set_tab(mut self, tab: Tab) -> Self {
        self.active_tab = tab;
        self
    }

    pub fn select_stock(mut self, symbol: impl Into<String>) -> Self {
        self.selected = Some(symbol.into());
        self
    }

    pub fn clear_selection(mut self) -> Self {
        self.selected = None;
        self
    }

    pub fn set_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    pub fn toggle_theme(mut self) -> Self {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self
    }
}
