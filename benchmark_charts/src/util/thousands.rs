//!
//! Thousands-separated number formatting.
//!

/// The digit group separator.
pub const SEPARATOR: char = ',';

/// Formats an integer with a separator between every group of three digits.
///
/// # Example
///
/// ```rust
/// use benchmark_charts::util::thousands::format;
///
/// assert_eq!(format(1234567), "1,234,567");
/// assert_eq!(format(999), "999");
/// ```
pub fn format(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            result.push(SEPARATOR);
        }
        result.push(digit);
    }
    result
}

/// The number of fractional digits kept by [`format_decimal`].
pub const FRACTION_DIGITS: usize = 3;

///
/// Formats a non-negative axis value, keeping up to three fractional digits.
///
/// Whole values are formatted like [`format`]. Negative values are clamped to zero.
///
pub fn format_decimal(value: f64) -> String {
    let scale = 10f64.powi(FRACTION_DIGITS as i32);
    let value = (value.max(0.0) * scale).round() / scale;
    let whole = format(value.trunc() as u64);
    let fraction = value.fract();
    if fraction == 0.0 {
        return whole;
    }
    let digits = format!("{fraction:.FRACTION_DIGITS$}");
    let digits = digits.trim_start_matches("0.").trim_end_matches('0');
    format!("{whole}.{digits}")
}
