/// Arbitrary-precision decimal helpers.
///
/// This module wraps [`bigdecimal::BigDecimal`] with the handful of
/// operations the built-in functions need: strict parsing of decimal
/// literals, division at a fixed scale with half-up rounding, stripping
/// trailing zeros, and rendering a value in plain (non-exponent) notation.
///
/// All fallible helpers return a `Result` carrying a [`FunctionError`], so a
/// function's execution rule can propagate them with `?`.
///
/// [`FunctionError`]: crate::error::FunctionError
pub mod num;
