//! Formatting helpers for presenting assessment figures.

/// Formats `value` as a percentage with precision chosen by `target`.
///
/// The target (not the current animation value) decides the precision so a
/// ramp toward 0.4 reads `0.00% … 0.40%` rather than flickering between styles.
pub fn format_ramp_percent(value: f64, target: f64) -> String {
    if target < 1.0 {
        format!("{value:.2}%")
    } else if target < 10.0 {
        format!("{value:.1}%")
    } else {
        format!("{}%", value.round() as i64)
    }
}

/// Rounded whole-number percentage.
pub fn format_whole_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// Plain number without a trailing `.0` for whole values (`45.0` → `45`).
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
