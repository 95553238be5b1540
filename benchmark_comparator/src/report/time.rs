//!
//! The time formatting rule shared by every report section.
//!

/// Shown for a missing measurement.
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown for a measurement of exactly zero.
pub const TOO_FAST: &str = "~0 µs";

///
/// Formats a millisecond value in the most readable unit.
///
/// Values below one millisecond are shown in microseconds, values of one
/// second and above in seconds.
///
pub fn format(value: Option<f64>) -> String {
    // The unit is chosen before rounding, so `0.9999996` prints `1000.00 µs`.
    match value {
        None => NOT_AVAILABLE.to_owned(),
        Some(value) if value == 0.0 => TOO_FAST.to_owned(),
        Some(value) if value < 1.0 => format!("{:.2} µs", value * 1000.0),
        Some(value) if value < 1000.0 => format!("{value:.3} ms"),
        Some(value) => format!("{:.3} s", value / 1000.0),
    }
}
