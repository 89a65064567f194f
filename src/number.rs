//! Exact rational numbers and their textual forms.
//!
//! All coefficients are kept as arbitrary-precision fractions so that
//! elimination never loses information. Decimal output is produced by
//! rounding the exact value, never by going through floating point.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Exact fraction used for every coefficient in the crate.
pub type Rational = BigRational;

/// Default number of fractional digits for decimal notation.
pub const DEFAULT_PRECISION: usize = 2;

/// Build an integral rational.
pub fn int(n: i64) -> Rational {
    Rational::from_integer(BigInt::from(n))
}

/// Build the fraction `numer / denom`.
///
/// Panics if `denom` is zero, so only use it with constant denominators.
pub fn ratio(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Parse an unsigned decimal literal.
///
/// Both `.` and `,` are accepted as the decimal separator, so `3,5` and
/// `3.5` are the same number. Returns `None` for anything else.
pub fn parse_decimal(text: &str) -> Option<Rational> {
    let mut parts = text.split(['.', ',']);
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next().unwrap_or("");
    if parts.next().is_some() || (whole.is_empty() && fraction.is_empty()) {
        return None;
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let numer: BigInt = format!("{whole}{fraction}").parse().ok()?;
    let denom = num_traits::pow(BigInt::from(10), fraction.len());
    Some(Rational::new(numer, denom))
}

/// Parse a number literal: a decimal or a chain of decimals separated by `/`.
///
/// `1.5/3.0` evaluates to `1/2`. Division by zero yields `None`.
pub fn parse_literal(text: &str) -> Option<Rational> {
    let mut pieces = text.split('/');
    let mut value = parse_decimal(pieces.next()?)?;
    for piece in pieces {
        let divisor = parse_decimal(piece)?;
        if divisor.is_zero() {
            return None;
        }
        value /= divisor;
    }
    Some(value)
}

/// Format a rational as `n` or `n/d`.
pub fn format_rational(value: &Rational) -> String {
    if value.denom().is_one() {
        format!("{}", value.numer())
    } else {
        format!("{}/{}", value.numer(), value.denom())
    }
}

/// Round to `precision` fractional digits, half away from zero.
pub fn round_to(value: &Rational, precision: usize) -> Rational {
    let scale = Rational::from_integer(num_traits::pow(BigInt::from(10), precision));
    (value * &scale).round() / scale
}

/// Format a rational as a decimal rounded to `precision` digits.
///
/// Trailing zeros are trimmed: `7/5` renders as `1.4` and `4` as `4`.
pub fn format_decimal(value: &Rational, precision: usize) -> String {
    let scale = num_traits::pow(BigInt::from(10), precision);
    let scaled = (value * Rational::from_integer(scale)).round().to_integer();
    if precision == 0 {
        return scaled.to_string();
    }

    let digits = format!("{:0>width$}", scaled.abs().to_string(), width = precision + 1);
    let (whole, fraction) = digits.split_at(digits.len() - precision);
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    if scaled.is_negative() {
        out.push('-');
    }
    out.push_str(whole);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("42"), Some(int(42)));
        assert_eq!(parse_decimal("1.5"), Some(ratio(3, 2)));
        assert_eq!(parse_decimal("3,5"), Some(ratio(7, 2)));
        assert_eq!(parse_decimal(".25"), Some(ratio(1, 4)));
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("1a"), None);
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(parse_literal("3/4"), Some(ratio(3, 4)));
        assert_eq!(parse_literal("1.5/3.0"), Some(ratio(1, 2)));
        assert_eq!(parse_literal("1/0"), None);
        assert_eq!(parse_literal("1/"), None);
    }

    #[test]
    fn test_format_rational() {
        assert_eq!(format_rational(&int(-3)), "-3");
        assert_eq!(format_rational(&ratio(6, 4)), "3/2");
        assert_eq!(format_rational(&ratio(-45, 116)), "-45/116");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(&ratio(7, 5), 2), "1.4");
        assert_eq!(format_decimal(&ratio(29, 20), 2), "1.45");
        assert_eq!(format_decimal(&int(4), 2), "4");
        assert_eq!(format_decimal(&ratio(-2, 3), 2), "-0.67");
        assert_eq!(format_decimal(&ratio(1, 8), 2), "0.13");
        assert_eq!(format_decimal(&ratio(-1, 1000), 2), "0");
        assert_eq!(format_decimal(&ratio(5, 2), 0), "3");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(&ratio(155, 116), 2), ratio(134, 100));
        assert!(round_to(&ratio(1, 1000), 2).is_zero());
    }
}
