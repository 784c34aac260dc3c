//! Pure derivation layer of the dashboard.
//!
//! Every function here is synchronous, side-effect free and total: it takes
//! the immutable prediction document (plus, where relevant, the current
//! [`view::ViewState`]) and produces the transport DTOs the handlers
//! serialize. Nothing is cached or memoized; derivations are recomputed in
//! full on every request, which is cheap at dashboard scale.

pub mod aggregates;
pub mod buckets;
pub mod stocks;
pub mod view;

pub use aggregates::{market_analysis, market_overview, recommendations, training_points};
pub use buckets::{risk_distribution, sentiment_distribution, signal_distribution};
pub use stocks::{
    filter_symbols, risk_return_points, sorted_symbols, stock_detail, stock_rows, stock_trend,
    top_performers,
};
pub use view::{SortKey, SortOrder, Tab, Theme, ViewMode, ViewState};

/// Arithmetic mean where the divisor is ALWAYS the total item count, never
/// the count of present values: missing entries must be defaulted by the
/// caller before this sees them. An empty slice yields NaN (0/0), which the
/// formatters downstream render as `N/A`.
pub(crate) fn mean(values: impl Iterator<Item = f64>, total: usize) -> f64 {
    values.sum::<f64>() / total as f64
}
