//! Display formatting for dashboard numerics.
//!
//! All formatters are total over `Option<f64>`: `None` and non-finite values
//! (a division by zero upstream produces NaN) render as `"N/A"` instead of
//! leaking a NaN literal into the UI. They never panic.

/// Decimal places used when a caller has no specific preference.
pub const DEFAULT_DECIMALS: usize = 2;

/// Fixed-decimal rendering of a plain number.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => "N/A".to_string(),
    }
}

/// Renders a ratio as a percentage, widening the precision as the magnitude
/// shrinks so small-but-nonzero returns stay legible:
/// below 0.001% the value is clipped to `<0.001%`, below 0.01% four decimals
/// are shown, below 0.1% three, otherwise the caller-supplied count.
pub fn format_percentage(value: Option<f64>, decimals: usize) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return "N/A".to_string();
    };

    let pct = v * 100.0;

    if pct.abs() < 0.001 && pct != 0.0 {
        return "<0.001%".to_string();
    }
    if pct.abs() < 0.01 && pct != 0.0 {
        return format!("{pct:.4}%");
    }
    if pct.abs() < 0.1 && pct != 0.0 {
        return format!("{pct:.3}%");
    }

    format!("{pct:.decimals$}%")
}

/// Renders a 0-100 style score: one decimal from 10 upwards, the
/// caller-supplied count below that.
pub fn format_score(value: Option<f64>, decimals: usize) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return "N/A".to_string();
    };

    if v.abs() >= 10.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.decimals$}")
    }
}

/// Renders a large count with an `M`/`K` suffix; values below 1000 pass
/// through unchanged.
pub fn format_large_number(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return "N/A".to_string();
    };

    if v >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if v >= 1_000.0 {
        format!("{:.1}K", v / 1_000.0)
    } else {
        v.to_string()
    }
}
