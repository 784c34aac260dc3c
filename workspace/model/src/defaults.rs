//! Single definition of the missing-value substitution policy.
//!
//! The producer omits or nulls fields at will, so every accessor chain into
//! the document has to pick a stand-in before arithmetic. The policy is per
//! field category: ratios and other plain numerics substitute 0, composite
//! scores substitute the neutral midpoint 50, categorical labels substitute
//! `UNKNOWN`. Consumers must go through these helpers (or the accessor
//! methods built on them) rather than unwrapping ad hoc.

/// Stand-in for a missing ratio, return, probability or other plain numeric.
pub const RATIO: f64 = 0.0;

/// Stand-in for a missing 0-100 score: the neutral midpoint.
pub const SCORE: f64 = 50.0;

/// Stand-in for a missing categorical label.
pub const LABEL: &str = "UNKNOWN";

/// Resolves an optional ratio-category value.
pub fn ratio(value: Option<f64>) -> f64 {
    value.unwrap_or(RATIO)
}

/// Resolves an optional score-category value.
pub fn score(value: Option<f64>) -> f64 {
    value.unwrap_or(SCORE)
}
