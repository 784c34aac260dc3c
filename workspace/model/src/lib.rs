//! Schema of the externally-produced prediction documents.
//!
//! The upstream producer emits `future.json` (one record per ticker plus
//! metadata and training history) and an optional `future_summary.json`
//! (aggregate statistics and recommendation lists). Both are read-only
//! snapshots: nothing here is mutated after deserialization.
//!
//! Every numeric leaf is `Option`-typed because the producer freely omits or
//! nulls fields; the substitution policy lives in [`defaults`] and is applied
//! exactly once, by the accessor methods.

pub mod defaults;

mod document;
mod summary;

pub use document::{
    BasicInfo, Horizon, HorizonReturn, Metadata, PredictionDocument, ProbabilityDistributions,
    RiskMetrics, SelectionScores, Signal, StockPrediction, TechnicalSignals, Trend, TrendAnalysis,
    TrendChange, TrainingHistory,
};
pub use summary::{AvoidReason, Recommendation, SummaryDocument, SummaryStats};
