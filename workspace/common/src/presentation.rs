//! Presentation-policy enums: the fixed threshold buckets the dashboard uses
//! for conditional styling. Thresholds are constants by design of the
//! upstream producer and are not configurable.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Visual badge flavor a widget should use for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Success,
    Danger,
    Warning,
    Info,
}

/// Risk bucket derived from 7-day volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Minimal,
}

impl RiskLevel {
    /// Buckets a volatility ratio: > 0.05 high, > 0.02 medium, > 0.001 low,
    /// anything else (including zero) minimal.
    pub fn from_volatility(volatility: f64) -> Self {
        if volatility > 0.05 {
            RiskLevel::High
        } else if volatility > 0.02 {
            RiskLevel::Medium
        } else if volatility > 0.001 {
            RiskLevel::Low
        } else {
            RiskLevel::Minimal
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            RiskLevel::High => BadgeVariant::Danger,
            RiskLevel::Medium => BadgeVariant::Warning,
            RiskLevel::Low => BadgeVariant::Success,
            RiskLevel::Minimal => BadgeVariant::Info,
        }
    }
}

/// Rating bucket derived from the composite selection score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceRating {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl PerformanceRating {
    pub fn from_score(composite_score: f64) -> Self {
        if composite_score >= 90.0 {
            PerformanceRating::Excellent
        } else if composite_score >= 75.0 {
            PerformanceRating::VeryGood
        } else if composite_score >= 60.0 {
            PerformanceRating::Good
        } else if composite_score >= 40.0 {
            PerformanceRating::Fair
        } else {
            PerformanceRating::Poor
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            PerformanceRating::Excellent | PerformanceRating::VeryGood => BadgeVariant::Success,
            PerformanceRating::Good => BadgeVariant::Info,
            PerformanceRating::Fair => BadgeVariant::Warning,
            PerformanceRating::Poor => BadgeVariant::Danger,
        }
    }
}

/// Magnitude bucket for an expected return, used for the trend glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendIcon {
    StrongUp,
    Up,
    Flat,
    Down,
    StrongDown,
}

impl TrendIcon {
    pub fn from_expected_return(expected_return: f64) -> Self {
        if expected_return > 0.03 {
            TrendIcon::StrongUp
        } else if expected_return > 0.01 {
            TrendIcon::Up
        } else if expected_return > -0.01 {
            TrendIcon::Flat
        } else if expected_return > -0.03 {
            TrendIcon::Down
        } else {
            TrendIcon::StrongDown
        }
    }
}
