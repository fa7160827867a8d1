//! Display helpers
//!
//! Formatting and normalization hints for whatever renders an estimate.

/// Total (in hours) that fills a progress bar completely
pub const DEFAULT_PROGRESS_REFERENCE_HOURS: f64 = 200.0;

/// Format hours with a fixed number of decimals
pub fn format_hours(hours: f64, precision: usize) -> String {
    format!("{:.*} hrs", precision, hours)
}

/// Fraction of `reference_hours` covered by `total_hours`, clamped to `[0, 1]`
pub fn progress_fraction(total_hours: f64, reference_hours: f64) -> f64 {
    if total_hours <= 0.0 || reference_hours <= 0.0 {
        return 0.0;
    }
    (total_hours / reference_hours).min(1.0)
}

/// Text progress bar of `width` cells, e.g. `[#####-----]`
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
