//! Validation and conversion of numeric text between bases.

use num_bigint::BigUint;

use super::radix::Radix;
use crate::error::{DevUtilsError, Result};

/// Maximum number of fractional digits produced in the target base.
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Check whether `text` is a number in `radix`.
///
/// Accepts the empty string, digits of the radix (either case), and at most
/// one `.` anywhere in the text.
pub fn is_valid_for_base(text: &str, radix: Radix) -> bool {
    let mut seen_point = false;
    for c in text.chars() {
        if c == '.' {
            if seen_point {
                return false;
            }
            seen_point = true;
        } else if radix.digit_value(c).is_none() {
            return false;
        }
    }
    true
}

/// Like [`is_valid_for_base`] but taking a raw base; out-of-range bases only
/// accept the empty string.
pub fn validate(text: &str, base: u32) -> bool {
    match Radix::new(base) {
        Ok(radix) => is_valid_for_base(text, radix),
        Err(_) => text.is_empty(),
    }
}

/// Convert `text` from one radix to another.
///
/// The integer part is exact. The fractional part is accumulated as an `f64`
/// and re-expanded to at most [`MAX_FRACTION_DIGITS`] digits, so fractions
/// that need more digits, or are not exact in binary floating point, come
/// out truncated.
///
/// # Errors
///
/// Returns [`DevUtilsError::Parse`] if `text` is not valid in `from`.
pub fn convert_base(text: &str, from: Radix, to: Radix) -> Result<String> {
    if text.is_empty() {
        return Ok(String::new());
    }
    if !is_valid_for_base(text, from) {
        return Err(DevUtilsError::Parse(format!(
            "\"{}\" is not a base-{} number",
            text, from
        )));
    }

    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };

    let mut out = parse_integer(integer, from).to_str_radix(to.get());
    if let Some(fraction) = fraction {
        let digits = expand_fraction(fraction_value(fraction, from), to);
        if !digits.is_empty() {
            out.push('.');
            out.push_str(&digits);
        }
    }
    Ok(out)
}

/// Like [`convert_base`] but taking raw bases.
///
/// # Errors
///
/// Returns [`DevUtilsError::InvalidArgument`] if either base is outside
/// `2..=36`, or [`DevUtilsError::Parse`] if `text` is not valid in `from`.
pub fn convert(text: &str, from: u32, to: u32) -> Result<String> {
    convert_base(text, Radix::new(from)?, Radix::new(to)?)
}

/// Render a non-negative integer in `radix`.
pub fn render_integer(value: &BigUint, radix: Radix) -> String {
    value.to_str_radix(radix.get())
}

/// Positional accumulation of pre-validated digits. Empty text is zero.
fn parse_integer(digits: &str, radix: Radix) -> BigUint {
    digits.chars().fold(BigUint::default(), |acc, c| {
        let digit = radix.digit_value(c).unwrap_or_default();
        acc * radix.get() + digit
    })
}

fn fraction_value(digits: &str, radix: Radix) -> f64 {
    let base = f64::from(radix.get());
    digits
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let digit = f64::from(radix.digit_value(c).unwrap_or_default());
            digit / base.powi(i as i32 + 1)
        })
        .sum()
}

/// Digits of a fraction in `radix`.
///
/// Long fractions of maximal digits can sum to exactly `1.0`; the value is
/// held below one so every digit stays inside the target alphabet.
fn expand_fraction(value: f64, radix: Radix) -> String {
    let base = f64::from(radix.get());
    let mut value = value.clamp(0.0, 1.0 - f64::EPSILON);
    let mut out = String::new();
    while value > 0.0 && out.len() < MAX_FRACTION_DIGITS {
        value *= base;
        let digit = value.floor().min(base - 1.0);
        debug_assert!(digit < base);
        out.push(Radix::digit_char(digit as u32));
        value = (value - digit).clamp(0.0, 1.0 - f64::EPSILON);
    }
    out
}
