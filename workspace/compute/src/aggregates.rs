//! Whole-market aggregates: the overview tiles, the intelligent-analysis
//! payload, the training-loss series and the AI-recommendations view.

use common::{
    AvoidEntry, MarketAnalysis, MarketOverview, MarketStatistics, ProbabilityAggregates,
    RatingDistribution, RecommendationsView, RiskAggregates, SummaryStats as SummaryStatsView,
    TopRecommendation, TrainingPoint, TrendAggregates,
};
use model::{Horizon, PredictionDocument, SummaryDocument, Trend, defaults};

use crate::{buckets, mean};

/// Aggregates for the overview stat tiles. Every mean divides by the total
/// ticker count with missing fields defaulted first, so an empty document
/// yields NaN tiles (rendered as N/A).
pub fn market_overview(doc: &PredictionDocument) -> MarketOverview {
    let total = doc.len();
    MarketOverview::new(
        total,
        doc.prediction_date().map(|d| d.to_string()),
        doc.feature_dimension(),
        doc.model_epochs(),
        mean(
            doc.stocks().map(|(_, s)| s.expected_return(Horizon::D7)),
            total,
        ),
        mean(doc.stocks().map(|(_, s)| s.volatility_7d()), total),
        mean(doc.stocks().map(|(_, s)| s.composite_score()), total),
        mean(doc.stocks().map(|(_, s)| s.sharpe_ratio_7d()), total),
    )
}

/// Everything the intelligent-analysis tab shows in one payload.
pub fn market_analysis(doc: &PredictionDocument) -> MarketAnalysis {
    let total = doc.len();

    let mut uptrends = 0;
    let mut downtrends = 0;
    for (_, stock) in doc.stocks() {
        match stock.trend() {
            Trend::Uptrend => uptrends += 1,
            Trend::Downtrend => downtrends += 1,
            Trend::Unknown => {}
        }
    }

    // Min/max over an empty document stay at the fold identities (±inf),
    // which serialize as null like the NaN means.
    let (min_expected, max_expected) = doc.stocks().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), (_, stock)| {
            let value = stock.expected_return(Horizon::D7);
            (min.min(value), max.max(value))
        },
    );

    MarketAnalysis {
        signals: buckets::signal_distribution(doc),
        risk: RiskAggregates::new(
            mean(doc.stocks().map(|(_, s)| s.volatility_7d()), total),
            mean(doc.stocks().map(|(_, s)| s.sharpe_ratio_7d()), total),
            mean(doc.stocks().map(|(_, s)| s.max_drawdown_7d()), total),
        ),
        probabilities: ProbabilityAggregates::new(
            mean(doc.stocks().map(|(_, s)| s.prob_positive_7d()), total),
            mean(doc.stocks().map(|(_, s)| s.prob_gain_5pct_7d()), total),
            mean(
                doc.stocks().map(|(_, s)| s.prob_outperform_market_7d()),
                total,
            ),
        ),
        trends: TrendAggregates::new(
            uptrends,
            downtrends,
            mean(doc.stocks().map(|(_, s)| s.trend_consistency()), total),
        ),
        risk_distribution: buckets::risk_distribution(doc),
        statistics: MarketStatistics {
            total_stocks: total,
            avg_expected_return_7d: mean(
                doc.stocks().map(|(_, s)| s.expected_return(Horizon::D7)),
                total,
            ),
            avg_volatility_7d: mean(doc.stocks().map(|(_, s)| s.volatility_7d()), total),
            min_expected_return_7d: min_expected,
            max_expected_return_7d: max_expected,
        },
    }
}

/// Training-loss chart series, or None when the document carries no
/// history. Epochs are 1-based; a validation series shorter than the
/// training series pads with zeros.
pub fn training_points(doc: &PredictionDocument) -> Option<Vec<TrainingPoint>> {
    let history = doc.training_history.as_ref()?;
    let points = history
        .train
        .iter()
        .enumerate()
        .map(|(index, train)| TrainingPoint {
            epoch: index + 1,
            train_loss: defaults::ratio(*train),
            valid_loss: defaults::ratio(history.valid.get(index).copied().flatten()),
        })
        .collect();
    Some(points)
}

/// The AI-recommendations view derived from the summary document.
pub fn recommendations(doc: &SummaryDocument) -> RecommendationsView {
    let summary = doc.summary.as_ref().map(|stats| {
        SummaryStatsView::new(
            stats.total_stocks_analyzed.unwrap_or(0),
            stats.successful_predictions.unwrap_or(0),
            stats.average_composite_score,
            stats.top_score,
            RatingDistribution {
                strong_buy: stats.rating_count("STRONG_BUY"),
                buy: stats.rating_count("BUY"),
                hold: stats.rating_count("HOLD"),
                sell: stats.rating_count("SELL"),
                strong_sell: stats.rating_count("STRONG_SELL"),
            },
        )
    });

    let top_recommendations = doc
        .top_recommendations
        .iter()
        .map(|(symbol, rec)| {
            TopRecommendation::new(
                symbol.clone(),
                rec.score,
                rec.expected_7d_return,
                rec.risk_level
                    .clone()
                    .unwrap_or_else(|| defaults::LABEL.to_string()),
            )
        })
        .collect();

    let avoid_list = doc
        .avoid_list
        .iter()
        .map(|(symbol, info)| {
            AvoidEntry::new(
                symbol.clone(),
                info.score,
                info.reason
                    .clone()
                    .unwrap_or_else(|| defaults::LABEL.to_string()),
            )
        })
        .collect();

    RecommendationsView {
        summary,
        top_recommendations,
        avoid_list,
    }
}
