//! Celsius → Fahrenheit conversion.
//!
//! The whole derivation lives here as pure functions: parse the raw field
//! text, apply the formula, format the result.  Nothing in this module can
//! fail loudly.  Text that does not parse to a finite number maps to the
//! empty string, which the screen shows as "no value yet" while the user
//! is still typing (`"-"`, `"3."` before the next digit, etc.).

use crate::config::DisplayFormat;

/// Convert raw Celsius field text into the Fahrenheit label text using the
/// default format (two fraction digits, trailing `°`).
///
/// ```
/// assert_eq!(tempconv::convert::convert("100"), "212.00°");
/// assert_eq!(tempconv::convert::convert("abc"), "");
/// ```
pub fn convert(input: &str) -> String {
    convert_with(input, &DisplayFormat::default())
}

/// Convert raw Celsius field text using an explicit [`DisplayFormat`].
pub fn convert_with(input: &str, format: &DisplayFormat) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    match parse_celsius(input) {
        Some(celsius) => format_fahrenheit(celsius_to_fahrenheit(celsius), format),
        None => String::new(),
    }
}

/// Parse field text as a finite base-10 number.
///
/// Leading and trailing ASCII control characters and spaces are ignored.
/// Accepts an optional sign, an optional fractional part and an optional
/// exponent.  `NaN`, `inf` and values that overflow `f64` are rejected.
pub fn parse_celsius(input: &str) -> Option<f64> {
    let text = input.trim_matches(|c: char| c <= ' ');
    if !is_decimal_literal(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `F = C × 9/5 + 32`, in double precision.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Format a Fahrenheit value for the label.
///
/// Always uses `.` as the decimal separator with no grouping.  A result
/// that overflowed renders as `Infinity` / `-Infinity` before the suffix.
pub fn format_fahrenheit(fahrenheit: f64, format: &DisplayFormat) -> String {
    if fahrenheit.is_nan() {
        return format!("NaN{}", format.unit_suffix);
    }
    if fahrenheit.is_infinite() {
        let sign = if fahrenheit < 0.0 { "-" } else { "" };
        return format!("{}Infinity{}", sign, format.unit_suffix);
    }
    format!(
        "{:.*}{}",
        format.fraction_digits as usize,
        fahrenheit,
        format.unit_suffix
    )
}

// ── Internal ──────────────────────────────────────────────────

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
///
/// `str::parse::<f64>` also accepts `inf`/`nan` spellings; those never
/// reach it.
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
