//! Size conversion and formatting utilities.
//!
//! Sizes are carried around as exact `u64` byte counts and only turned into
//! kilobytes at the display boundary. Formatting uses integer arithmetic so
//! the two-decimal output never depends on floating-point error.

/// Number of bytes in one kilobyte, as reported by this tool.
pub const BYTES_PER_KB: u64 = 1024;

/// Convert a byte count into kilobytes.
///
/// # Examples
///
/// ```
/// # use file_size::utils::bytes_to_kb;
/// assert!((bytes_to_kb(1536) - 1.5).abs() < f64::EPSILON);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bytes_to_kb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_KB as f64
}

/// Format a byte count as kilobytes with exactly two decimal places.
///
/// The value is rounded half-to-even on the exact quotient `bytes / 1024`,
/// so boundary values such as `0.125` become `0.12` while `0.375` becomes
/// `0.38`. The unit suffix is not included.
///
/// # Examples
///
/// ```
/// # use file_size::utils::format_kb;
/// assert_eq!(format_kb(0), "0.00");
/// assert_eq!(format_kb(3072), "3.00");
/// assert_eq!(format_kb(500), "0.49");
/// ```
#[must_use]
pub fn format_kb(bytes: u64) -> String {
    let hundredths = round_half_even(u128::from(bytes) * 100, u128::from(BYTES_PER_KB));

    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Divide `numerator` by `denominator`, rounding ties to the even quotient.
const fn round_half_even(numerator: u128, denominator: u128) -> u128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let twice = remainder * 2;

    if twice > denominator || (twice == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
