//! Categorical bucketing of the ticker set: sentiment, signal and risk
//! distributions.

use common::{RiskDistribution, RiskLevel, SentimentSlice, SignalDistribution};
use model::{PredictionDocument, Signal};

/// Composite score above which a ticker counts as bullish.
const BULLISH_SCORE: f64 = 60.0;
/// Composite score below which a ticker counts as bearish.
const BEARISH_SCORE: f64 = 40.0;

/// Buckets every ticker by composite score into bullish, bearish and
/// neutral, in that slice order. Missing scores count as the neutral 50.
/// Percentages are rounded whole percent of the total ticker count, so an
/// empty document yields NaN shares (serialized as null).
pub fn sentiment_distribution(doc: &PredictionDocument) -> Vec<SentimentSlice> {
    let total = doc.len();
    let mut bullish = 0;
    let mut bearish = 0;
    let mut neutral = 0;
    for (_, stock) in doc.stocks() {
        let score = stock.composite_score();
        if score > BULLISH_SCORE {
            bullish += 1;
        } else if score < BEARISH_SCORE {
            bearish += 1;
        } else {
            neutral += 1;
        }
    }

    let slice = |name: &str, count: usize| SentimentSlice {
        name: name.to_string(),
        count,
        percent: (count as f64 / total as f64 * 100.0).round(),
    };
    vec![
        slice("bullish", bullish),
        slice("bearish", bearish),
        slice("neutral", neutral),
    ]
}

/// Counts predicted signals across the document; unknown labels are
/// dropped from all three buckets.
pub fn signal_distribution(doc: &PredictionDocument) -> SignalDistribution {
    let mut distribution = SignalDistribution {
        buy: 0,
        sell: 0,
        hold: 0,
    };
    for (_, stock) in doc.stocks() {
        match stock.signal() {
            Signal::Buy => distribution.buy += 1,
            Signal::Sell => distribution.sell += 1,
            Signal::Hold => distribution.hold += 1,
            Signal::Unknown => {}
        }
    }
    distribution
}

/// Counts tickers per volatility-derived risk level. Missing volatility
/// buckets as minimal via the 0 default.
pub fn risk_distribution(doc: &PredictionDocument) -> RiskDistribution {
    let mut distribution = RiskDistribution {
        high: 0,
        medium: 0,
        low: 0,
        minimal: 0,
    };
    for (_, stock) in doc.stocks() {
        match RiskLevel::from_volatility(stock.volatility_7d()) {
            RiskLevel::High => distribution.high += 1,
            RiskLevel::Medium => distribution.medium += 1,
            RiskLevel::Low => distribution.low += 1,
            RiskLevel::Minimal => distribution.minimal += 1,
        }
    }
    distribution
}
