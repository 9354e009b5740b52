// SPDX-License-Identifier: MPL-2.0
//! Time formatting and slider math for the overlay labels.

/// Formats milliseconds as `MM:SS`.
///
/// Minutes are not wrapped into hours: 75 minutes renders as `75:00`.
pub fn format_mm_ss(millis: u64) -> String {
    let total_secs = millis / 1000;
    let minutes = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", minutes, secs)
}

/// Formats the combined `elapsed / total` label.
pub fn time_label(position_millis: u64, duration_millis: u64) -> String {
    format!(
        "{} / {}",
        format_mm_ss(position_millis),
        format_mm_ss(duration_millis)
    )
}

/// Slider position in `[0, 1]`; 0 while the duration is unknown.
#[allow(clippy::cast_precision_loss)] // Millisecond counts stay far below 2^52
pub fn slider_fraction(position_millis: u64, duration_millis: u64) -> f64 {
    if duration_millis == 0 {
        return 0.0;
    }
    (position_millis as f64 / duration_millis as f64).clamp(0.0, 1.0)
}

/// Converts a slider fraction into an absolute position.
///
/// The fraction is clamped into `[0, 1]` first; NaN counts as 0.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn position_for_fraction(fraction: f64, duration_millis: u64) -> u64 {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let position = (fraction * duration_millis as f64).round() as u64;
    position.min(duration_millis)
}
