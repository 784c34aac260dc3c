//! Per-stock derivations: filtering, sorting, table rows, detail panels,
//! trend series and the risk/return scatter.

use std::cmp::Ordering;

use common::{
    BasicPanel, DailyReturnPoint, HorizonPoint, PerformanceRating, ProbabilityPanel, RiskLevel,
    RiskPanel, ScatterPoint, ScorePanel, StockDetail, StockRow, StockTrend, TechnicalPanel,
    TrendIcon,
};
use model::{Horizon, PredictionDocument, Signal, StockPrediction, Trend};

use crate::view::{SortKey, SortOrder, ViewState};

/// Number of rows the top-performers view keeps.
const TOP_PERFORMER_COUNT: usize = 10;

/// Case-insensitive substring match of the search term against the ticker.
pub fn filter_symbols<'a>(doc: &'a PredictionDocument, search: &str) -> Vec<&'a str> {
    let needle = search.to_lowercase();
    doc.symbols()
        .filter(|symbol| symbol.to_lowercase().contains(&needle))
        .collect()
}

/// The comparison value for one sort column; missing fields compare as 0.
///
/// Note the composite score also falls back to 0 here (not the table's
/// neutral 50): a scoreless ticker sorts to the bottom of a confidence sort.
fn sort_value(stock: &StockPrediction, key: SortKey) -> f64 {
    match key {
        SortKey::Prediction => stock.expected_return(Horizon::D7),
        SortKey::Volatility => stock.volatility_7d(),
        SortKey::Confidence => stock.composite_score_or_zero(),
        SortKey::Cumulative => stock.cumulative_return(Horizon::D7),
        SortKey::LastReturn => stock.last_known_return(),
    }
}

/// Tickers matching the view's search term, ordered by its sort selection.
/// Equal keys keep slice-sort order; nothing downstream relies on it.
pub fn sorted_symbols<'a>(doc: &'a PredictionDocument, view: &ViewState) -> Vec<&'a str> {
    let mut symbols = filter_symbols(doc, &view.search);
    symbols.sort_by(|a, b| {
        let a_value = doc.stock(a).map_or(0.0, |s| sort_value(s, view.sort_by));
        let b_value = doc.stock(b).map_or(0.0, |s| sort_value(s, view.sort_by));
        let ordering = a_value.partial_cmp(&b_value).unwrap_or(Ordering::Equal);
        match view.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    symbols
}

fn signal_badge(signal: Signal) -> common::BadgeVariant {
    match signal {
        Signal::Buy => common::BadgeVariant::Success,
        Signal::Sell => common::BadgeVariant::Danger,
        Signal::Hold => common::BadgeVariant::Warning,
        Signal::Unknown => common::BadgeVariant::Default,
    }
}

fn trend_badge(trend: Trend) -> common::BadgeVariant {
    match trend {
        Trend::Uptrend => common::BadgeVariant::Success,
        _ => common::BadgeVariant::Danger,
    }
}

fn row(symbol: &str, stock: &StockPrediction) -> StockRow {
    let composite_score = stock.composite_score();
    let expected_return_7d = stock.expected_return(Horizon::D7);
    let volatility_7d = stock.volatility_7d();
    let rating = PerformanceRating::from_score(composite_score);
    let signal = stock.signal();

    StockRow {
        symbol: symbol.to_string(),
        expected_return_1d: stock.expected_return(Horizon::D1),
        expected_return_3d: stock.expected_return(Horizon::D3),
        expected_return_5d: stock.expected_return(Horizon::D5),
        expected_return_7d,
        cumulative_return_7d: stock.cumulative_return(Horizon::D7),
        last_known_return: stock.last_known_return(),
        composite_score,
        rating,
        rating_badge: rating.badge(),
        sharpe_ratio_7d: stock.sharpe_ratio_7d(),
        volatility_7d,
        risk_level: RiskLevel::from_volatility(volatility_7d),
        signal: signal.label().to_string(),
        signal_badge: signal_badge(signal),
        trend_strength: stock.trend_strength(),
        trend_icon: TrendIcon::from_expected_return(expected_return_7d),
        data_points: stock.data_points(),
    }
}

/// Table rows for the current view selection.
pub fn stock_rows(doc: &PredictionDocument, view: &ViewState) -> Vec<StockRow> {
    sorted_symbols(doc, view)
        .into_iter()
        .filter_map(|symbol| doc.stock(symbol).map(|stock| row(symbol, stock)))
        .collect()
}

/// The full ticker set ordered by expected 7-day return descending, first 10.
pub fn top_performers(doc: &PredictionDocument) -> Vec<StockRow> {
    let view = ViewState::default()
        .set_sort_key(SortKey::Prediction)
        .set_sort_order(SortOrder::Desc);
    let mut rows = stock_rows(doc, &view);
    rows.truncate(TOP_PERFORMER_COUNT);
    rows
}

/// Deep-analysis panels for one ticker.
pub fn stock_detail(doc: &PredictionDocument, symbol: &str) -> Option<StockDetail> {
    let stock = doc.stock(symbol)?;
    let signal = stock.signal();
    let trend = stock.trend();
    let scores = stock.selection_scores.clone().unwrap_or_default();

    Some(StockDetail {
        symbol: symbol.to_string(),
        basic: BasicPanel {
            prediction_date: stock
                .basic_info
                .as_ref()
                .and_then(|b| b.prediction_date.clone()),
            data_points: stock.data_points(),
            feature_dimension: stock.feature_dimension(),
            last_known_return: stock.last_known_return(),
        },
        risk: RiskPanel {
            volatility_7d: stock.volatility_7d(),
            volatility_20d: stock.volatility_20d(),
            var_95_7d: stock.var_95_7d(),
            var_99_7d: stock.var_99_7d(),
            sharpe_ratio_7d: stock.sharpe_ratio_7d(),
            max_drawdown_7d: stock.max_drawdown_7d(),
        },
        technical: TechnicalPanel {
            signal: signal.label().to_string(),
            signal_badge: signal_badge(signal),
            trend: trend.label().to_string(),
            trend_badge: trend_badge(trend),
            trend_strength: stock.trend_strength(),
            trend_consistency: stock.trend_consistency(),
            momentum_5d: stock.momentum_5d(),
            trend_change_vs_history: stock.trend_change_vs_history().label().to_string(),
        },
        probabilities: ProbabilityPanel {
            prob_positive_7d: stock.prob_positive_7d(),
            prob_gain_5pct_7d: stock.prob_gain_5pct_7d(),
            prob_outperform_market_7d: stock.prob_outperform_market_7d(),
        },
        scores: ScorePanel {
            composite_score: stock.composite_score(),
            return_score: model::defaults::ratio(scores.return_score),
            risk_score: model::defaults::ratio(scores.risk_score),
            sharpe_score: model::defaults::ratio(scores.sharpe_score),
            probability_score: model::defaults::ratio(scores.probability_score),
            trend_score: model::defaults::ratio(scores.trend_score),
            technical_score: model::defaults::ratio(scores.technical_score),
        },
    })
}

/// Horizon trend line plus the 7-day daily-return series for one ticker,
/// pre-scaled to percent for the charts.
pub fn stock_trend(doc: &PredictionDocument, symbol: &str) -> Option<StockTrend> {
    let stock = doc.stock(symbol)?;

    let horizons = Horizon::ALL
        .iter()
        .map(|&horizon| HorizonPoint {
            horizon: horizon.label().to_string(),
            days: horizon.days(),
            expected_pct: stock.expected_return(horizon) * 100.0,
            cumulative_pct: stock.cumulative_return(horizon) * 100.0,
        })
        .collect();

    let mut running = 0.0;
    let daily_returns = stock
        .daily_returns_7d()
        .into_iter()
        .enumerate()
        .map(|(index, daily)| {
            running += daily;
            DailyReturnPoint {
                day: index as u32 + 1,
                return_pct: daily * 100.0,
                cumulative_pct: running * 100.0,
            }
        })
        .collect();

    Some(StockTrend {
        symbol: symbol.to_string(),
        horizons,
        daily_returns,
    })
}

/// Risk/return scatter over the tickers matching the search term.
pub fn risk_return_points(doc: &PredictionDocument, search: &str) -> Vec<ScatterPoint> {
    filter_symbols(doc, search)
        .into_iter()
        .filter_map(|symbol| {
            doc.stock(symbol).map(|stock| ScatterPoint {
                symbol: symbol.to_uppercase(),
                risk_pct: stock.volatility_7d() * 100.0,
                return_pct: stock.expected_return(Horizon::D7) * 100.0,
                confidence: stock.composite_score_or_zero(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::PredictionDocument;

    fn doc(json: &str) -> PredictionDocument {
        serde_json::from_str(json).expect("fixture should parse")
    }

    fn three_tickers() -> PredictionDocument {
        doc(r#"{
            "comprehensive_predictions": {
                "AAPL": {
                    "multi_horizon_returns": { "7d": { "expected_return": 0.03, "cumulative_return": 0.05 } },
                    "risk_metrics": { "volatility_7d": 0.06 },
                    "selection_scores": { "composite_score": 70 }
                },
                "MSFT": {
                    "multi_horizon_returns": { "7d": { "expected_return": -0.01 } },
                    "risk_metrics": { "volatility_7d": 0.03 },
                    "selection_scores": { "composite_score": 50 }
                },
                "baaz": {
                    "multi_horizon_returns": { "7d": { "expected_return": 0.01 } },
                    "selection_scores": { "composite_score": 30 }
                }
            }
        }"#)
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let doc = three_tickers();
        let mut matched = filter_symbols(&doc, "aa");
        matched.sort();
        assert_eq!(matched, vec!["AAPL", "baaz"]);
        assert_eq!(filter_symbols(&doc, "").len(), 3);
        assert!(filter_symbols(&doc, "zzz").is_empty());
    }

    #[test]
    fn test_sort_descending_by_expected_return() {
        let doc = three_tickers();
        let view = ViewState::default();
        assert_eq!(sorted_symbols(&doc, &view), vec!["AAPL", "baaz", "MSFT"]);
    }

    #[test]
    fn test_sort_ascending_by_volatility_missing_counts_as_zero() {
        let doc = three_tickers();
        let view = ViewState::default()
            .set_sort_key(SortKey::Volatility)
            .set_sort_order(SortOrder::Asc);
        // baaz has no risk_metrics at all; it sorts as volatility 0.
        assert_eq!(sorted_symbols(&doc, &view), vec!["baaz", "MSFT", "AAPL"]);
    }

    #[test]
    fn test_sort_by_missing_cumulative_is_total_order() {
        let doc = three_tickers();
        let view = ViewState::default()
            .set_sort_key(SortKey::Cumulative)
            .set_sort_order(SortOrder::Desc);
        let symbols = sorted_symbols(&doc, &view);
        // Only AAPL reports a cumulative return; the rest tie at 0 behind it.
        assert_eq!(symbols[0], "AAPL");
        assert_eq!(symbols.len(), 3);
    }

    #[test]
    fn test_rows_carry_rating_and_risk_buckets() {
        let doc = three_tickers();
        let rows = stock_rows(&doc, &ViewState::default());
        let aapl = rows.iter().find(|r| r.symbol == "AAPL").unwrap();
        assert_eq!(aapl.rating, PerformanceRating::Good);
        assert_eq!(aapl.risk_level, RiskLevel::High);
        assert_eq!(aapl.signal, "UNKNOWN");
        let baaz = rows.iter().find(|r| r.symbol == "baaz").unwrap();
        assert_eq!(baaz.risk_level, RiskLevel::Minimal);
        assert_eq!(baaz.rating, PerformanceRating::Poor);
    }

    #[test]
    fn test_top_performers_orders_and_truncates() {
        let doc = three_tickers();
        let top = top_performers(&doc);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].symbol, "AAPL");
        assert_eq!(top[2].symbol, "MSFT");
    }

    #[test]
    fn test_stock_detail_unknown_symbol() {
        let doc = three_tickers();
        assert!(stock_detail(&doc, "TSLA").is_none());
        let detail = stock_detail(&doc, "AAPL").unwrap();
        assert_eq!(detail.scores.composite_score, 70.0);
        assert_eq!(detail.technical.trend, "UNKNOWN");
    }

    #[test]
    fn test_stock_trend_accumulates_daily_returns() {
        let doc = doc(r#"{
            "comprehensive_predictions": {
                "aapl": {
                    "multi_horizon_returns": {
                        "1d": { "expected_return": 0.01 },
                        "7d": { "expected_return": 0.03, "daily_returns": [0.01, null, 0.02] }
                    }
                }
            }
        }"#);
        let trend = stock_trend(&doc, "aapl").unwrap();
        assert_eq!(trend.horizons.len(), 4);
        assert_eq!(trend.horizons[0].expected_pct, 1.0);
        // Missing horizons chart as 0.
        assert_eq!(trend.horizons[1].expected_pct, 0.0);
        let daily: Vec<(f64, f64)> = trend
            .daily_returns
            .iter()
            .map(|p| (p.return_pct, p.cumulative_pct))
            .collect();
        assert_eq!(daily, vec![(1.0, 1.0), (0.0, 1.0), (2.0, 3.0)]);
    }

    #[test]
    fn test_scatter_scales_and_uppercases() {
        let doc = three_tickers();
        let points = risk_return_points(&doc, "baaz");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].symbol, "BAAZ");
        assert_eq!(points[0].return_pct, 1.0);
        // Scatter confidence uses the 0 fallback, not the table's 50.
        assert_eq!(points[0].confidence, 30.0);
    }
}
