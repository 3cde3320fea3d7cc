use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};

use crate::error::FunctionError;

/// Number of fractional digits every quotient is rounded to.
pub const DIVISION_SCALE: i64 = 8;

/// Returns `true` if `text` is a decimal literal.
///
/// Accepted form: an optional sign, digits with at most one decimal point
/// (at least one digit overall), and an optional exponent made of `e`/`E`,
/// an optional sign and at least one digit. Digit group separators and
/// surrounding whitespace are rejected.
///
/// # Example
/// ```
/// use calculator::util::num::is_decimal_literal;
///
/// assert!(is_decimal_literal("-3.25"));
/// assert!(is_decimal_literal("1e3"));
/// assert!(is_decimal_literal(".5"));
/// assert!(!is_decimal_literal("1_000"));
/// assert!(!is_decimal_literal(""));
/// ```
#[must_use]
pub fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(index) => (&unsigned[..index], Some(&unsigned[index + 1..])),
        None => (unsigned, None),
    };

    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok = !(integer.is_empty() && fraction.is_empty())
                      && integer.bytes().all(|b| b.is_ascii_digit())
                      && fraction.bytes().all(|b| b.is_ascii_digit());

    let exponent_ok = exponent.is_none_or(|exp| {
                                  let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
                                  !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
                              });

    mantissa_ok && exponent_ok
}

/// Parses an evaluated argument into an arbitrary-precision decimal.
///
/// ## Errors
/// Returns [`FunctionError::InvalidNumber`] naming the offending text if it
/// is not a decimal literal, or if its scale exceeds [`MAX_LITERAL_SCALE`]
/// in either direction.
///
/// ## Example
/// ```
/// use calculator::{error::FunctionError, util::num::parse_decimal};
///
/// assert_eq!(parse_decimal("2.50").unwrap().to_string(), "2.50");
///
/// let err = parse_decimal("a").unwrap_err();
/// assert_eq!(err, FunctionError::InvalidNumber { argument: "a".to_string() });
/// ```
pub fn parse_decimal(text: &str) -> Result<BigDecimal, FunctionError> {
    let invalid = || FunctionError::InvalidNumber { argument: text.to_string() };

    if !is_decimal_literal(text) {
        return Err(invalid());
    }

    let value = BigDecimal::from_str(text).map_err(|_| invalid())?;
    let (_, scale) = value.as_bigint_and_exponent();
    if scale.unsigned_abs() > MAX_LITERAL_SCALE {
        return Err(invalid());
    }

    Ok(value)
}

/// Error reported when the operands' scales are too far apart to divide.
fn scale_out_of_range() -> FunctionError {
    FunctionError::Arithmetic { details: "error occurred during division: scale out of range".to_string() }
}

/// Raises ten to the given power.
fn pow10(exponent: u64) -> Result<BigInt, FunctionError> {
    let exponent = u32::try_from(exponent).map_err(|_| scale_out_of_range())?;
    Ok(BigInt::from(10u8).pow(exponent))
}

/// Divides `dividend` by `divisor`, rounding the exact quotient to
/// [`DIVISION_SCALE`] fractional digits.
///
/// Ties are rounded half-up, i.e. away from zero. The result always carries
/// exactly [`DIVISION_SCALE`] fractional digits; use [`strip_trailing_zeros`]
/// to normalise it.
///
/// ## Errors
/// Returns [`FunctionError::Arithmetic`] when `divisor` is zero.
///
/// ## Example
/// ```
/// use calculator::util::num::{divide_scaled, parse_decimal};
///
/// let q = divide_scaled(&parse_decimal("2").unwrap(), &parse_decimal("3").unwrap()).unwrap();
/// assert_eq!(q.to_string(), "0.66666667");
///
/// assert!(divide_scaled(&parse_decimal("1").unwrap(), &parse_decimal("0").unwrap()).is_err());
/// ```
pub fn divide_scaled(dividend: &BigDecimal, divisor: &BigDecimal) -> Result<BigDecimal, FunctionError> {
    let (dividend_digits, dividend_scale) = dividend.as_bigint_and_exponent();
    let (divisor_digits, divisor_scale) = divisor.as_bigint_and_exponent();

    if divisor_digits.sign() == Sign::NoSign {
        return Err(FunctionError::Arithmetic { details: "error occurred during division: Division by zero".to_string() });
    }

    // q * 10^scale = (a / b) * 10^(scale + scale_b - scale_a)
    let shift = DIVISION_SCALE.checked_add(divisor_scale)
                              .and_then(|scale| scale.checked_sub(dividend_scale))
                              .ok_or_else(scale_out_of_range)?;
    let (numerator, denominator) = if shift >= 0 {
        (dividend_digits * pow10(shift.unsigned_abs())?, divisor_digits)
    } else {
        (dividend_digits, divisor_digits * pow10(shift.unsigned_abs())?)
    };

    let quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;

    let twice_remainder = remainder.magnitude().clone() * 2u32;
    let rounded = if &twice_remainder >= denominator.magnitude() {
        if numerator.sign() == denominator.sign() {
            quotient + 1u32
        } else {
            quotient - 1u32
        }
    } else {
        quotient
    };

    Ok(BigDecimal::new(rounded, DIVISION_SCALE))
}

/// Removes trailing zeros from the fractional part of `value`.
///
/// The scale may become negative (`100.0` is stored as `1` scaled by `-2`);
/// [`to_decimal_string`] still renders it as `100`.
#[must_use]
pub fn strip_trailing_zeros(value: &BigDecimal) -> BigDecimal {
    if value.sign() == Sign::NoSign {
        return BigDecimal::new(BigInt::from(0u8), 0);
    }
    value.normalized()
}

/// Most zeros [`to_decimal_string`] pads a value with before switching to
/// exponent notation.
pub const PLAIN_PADDING_LIMIT: u64 = 1_000;

/// Largest scale, positive or negative, a literal may carry.
pub const MAX_LITERAL_SCALE: u64 = 1_000_000;

/// Renders `value` in scientific notation: `d.ddd` followed by a signed
/// exponent, e.g. `1.5E+2000`.
fn to_scientific_string(sign: &str, magnitude: &str, scale: i64) -> String {
    let adjusted = i128::try_from(magnitude.len()).unwrap_or(i128::MAX) - 1 - i128::from(scale);
    let (first, rest) = magnitude.split_at(1);
    let exponent_sign = if adjusted < 0 { '-' } else { '+' };
    let exponent = adjusted.unsigned_abs();

    if rest.is_empty() {
        format!("{sign}{first}E{exponent_sign}{exponent}")
    } else {
        format!("{sign}{first}.{rest}E{exponent_sign}{exponent}")
    }
}

/// Renders `value` as a decimal string.
///
/// The number of fractional digits is the value's scale, so `5.0` stays
/// `5.0` and a value with a negative scale is padded with zeros. When that
/// would take more than [`PLAIN_PADDING_LIMIT`] zeros, exponent notation is
/// used instead.
///
/// ## Example
/// ```
/// use calculator::util::num::{parse_decimal, strip_trailing_zeros, to_decimal_string};
///
/// assert_eq!(to_decimal_string(&parse_decimal("-0.050").unwrap()), "-0.050");
/// assert_eq!(to_decimal_string(&parse_decimal("1.2e3").unwrap()), "1200");
/// assert_eq!(to_decimal_string(&strip_trailing_zeros(&parse_decimal("20.00").unwrap())), "20");
/// assert_eq!(to_decimal_string(&parse_decimal("1.5e5000").unwrap()), "1.5E+5000");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_decimal_string(value: &BigDecimal) -> String {
    let (digits, scale) = value.as_bigint_and_exponent();
    let magnitude = digits.magnitude().to_string();
    let sign = if digits.sign() == Sign::Minus { "-" } else { "" };

    if digits.sign() == Sign::NoSign && scale <= 0 {
        return "0".to_string();
    }

    let digit_count = magnitude.len() as u64;
    let padding = if scale < 0 {
        scale.unsigned_abs()
    } else {
        scale.unsigned_abs().saturating_sub(digit_count)
    };
    if padding > PLAIN_PADDING_LIMIT {
        return to_scientific_string(sign, &magnitude, scale);
    }

    // padding is at most PLAIN_PADDING_LIMIT from here on
    let padding = "0".repeat(padding as usize);
    match usize::try_from(scale) {
        Ok(0) => format!("{sign}{magnitude}"),
        Ok(scale) if magnitude.len() > scale => {
            let (integer, fraction) = magnitude.split_at(magnitude.len() - scale);
            format!("{sign}{integer}.{fraction}")
        },
        Ok(_) => format!("{sign}0.{padding}{magnitude}"),
        Err(_) => format!("{sign}{magnitude}{padding}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dec(text: &str) -> BigDecimal {
        parse_decimal(text).unwrap()
    }

    fn divide(a: &str, b: &str) -> String {
        to_decimal_string(&divide_scaled(&dec(a), &dec(b)).unwrap())
    }

    #[test]
    fn literals_follow_decimal_grammar() {
        for ok in ["0", "42", "-7", "+7", "3.", ".5", "1.25e-3", "2E+10"] {
            assert!(is_decimal_literal(ok), "{ok} should be accepted");
        }
        for bad in ["", "-", ".", "a", "1a", "1.2.3", "1e", "e5", "1_0", "--1", "0x10", "1,5"] {
            assert!(!is_decimal_literal(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn invalid_number_names_argument() {
        assert_eq!(parse_decimal("abc").unwrap_err(),
                   FunctionError::InvalidNumber { argument: "abc".to_string() });
    }

    #[test]
    fn division_rounds_half_up_at_eight_digits() {
        assert_eq!(divide("100", "3"), "33.33333333");
        assert_eq!(divide("2", "3"), "0.66666667");
        assert_eq!(divide("-2", "3"), "-0.66666667");
        assert_eq!(divide("1", "-3"), "-0.33333333");
        // exact tie at the ninth digit
        assert_eq!(divide("0.000000005", "1"), "0.00000001");
        assert_eq!(divide("-0.000000005", "1"), "-0.00000001");
        assert_eq!(divide("0.000000004", "1"), "0.00000000");
    }

    #[test]
    fn division_handles_mixed_scales() {
        assert_eq!(divide("10.4", "4"), "2.60000000");
        assert_eq!(divide("1e3", "0.5"), "2000.00000000");
        assert_eq!(divide("5", "-10"), "-0.50000000");
    }

    #[test]
    fn division_by_zero_is_arithmetic_error() {
        let err = divide_scaled(&dec("10"), &dec("0.000")).unwrap_err();
        assert!(matches!(err, FunctionError::Arithmetic { .. }));
        assert!(err.to_string().contains("Division by zero"));
    }

    #[test]
    fn plain_rendering_never_uses_exponent() {
        assert_eq!(to_decimal_string(&dec("0")), "0");
        assert_eq!(to_decimal_string(&dec("0.00")), "0.00");
        assert_eq!(to_decimal_string(&dec("0e5")), "0");
        assert_eq!(to_decimal_string(&dec("-12.5")), "-12.5");
        assert_eq!(to_decimal_string(&dec("1e-10")), "0.0000000001");
        assert_eq!(to_decimal_string(&dec("-3E2")), "-300");
    }

    #[test]
    fn huge_exponents_render_compactly() {
        assert_eq!(to_decimal_string(&dec("1e50000")), "1E+50000");
        assert_eq!(to_decimal_string(&dec("-2.5e-3000")), "-2.5E-3000");
        assert_eq!(to_decimal_string(&dec("123e2000")), "1.23E+2002");
        assert_eq!(to_decimal_string(&dec("1e1000")).len(), 1001);
        assert_eq!(to_decimal_string(&dec("1e1001")), "1E+1001");
    }

    #[test]
    fn literal_scale_is_bounded() {
        assert!(parse_decimal("1e1000000").is_ok());
        assert_eq!(parse_decimal("1e2000000000").unwrap_err(),
                   FunctionError::InvalidNumber { argument: "1e2000000000".to_string() });
        assert!(parse_decimal("1e-1000001").is_err());
    }

    #[test]
    fn stripping_removes_only_insignificant_zeros() {
        assert_eq!(to_decimal_string(&strip_trailing_zeros(&dec("2.00000000"))), "2");
        assert_eq!(to_decimal_string(&strip_trailing_zeros(&dec("2.60000000"))), "2.6");
        assert_eq!(to_decimal_string(&strip_trailing_zeros(&dec("100.000"))), "100");
        assert_eq!(to_decimal_string(&strip_trailing_zeros(&dec("0.00000000"))), "0");
    }
}
