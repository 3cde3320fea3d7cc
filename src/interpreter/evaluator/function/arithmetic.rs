use bigdecimal::BigDecimal;

use crate::{
    error::FunctionError,
    interpreter::evaluator::function::core::{Arity, Function, FunctionResult},
    util::num::{divide_scaled, parse_decimal, strip_trailing_zeros, to_decimal_string},
};

/// Parses every argument and folds them left to right with `step`.
///
/// Each argument is parsed immediately before it is combined, so the first
/// failure in argument order is the one reported.
fn fold_decimals(arguments: &[String],
                 step: impl Fn(BigDecimal, &BigDecimal) -> FunctionResult<BigDecimal>)
                 -> FunctionResult<BigDecimal> {
    let mut values = arguments.iter().map(|argument| parse_decimal(argument));

    let first = values.next()
                      .ok_or(FunctionError::MissingArgument { position: 1 })??;

    values.try_fold(first, |accumulator, value| step(accumulator, &value?))
}

/// Adds a series of numbers.
///
/// # Example
/// ```
/// use calculator::interpreter::evaluator::function::{arithmetic::Add, core::Function};
///
/// let args = ["5.335".to_string(), "3.1".to_string()];
/// assert_eq!(Add.execute(&args).unwrap(), "8.435");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl Function for Add {
    fn name(&self) -> &str {
        "add"
    }

    fn arity(&self) -> Arity {
        Arity::AtLeast(2)
    }

    fn execute(&self, arguments: &[String]) -> FunctionResult<String> {
        let sum = fold_decimals(arguments, |sum, value| Ok(sum + value))?;
        Ok(to_decimal_string(&sum))
    }
}

/// Subtracts every following number from the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subtract;

impl Function for Subtract {
    fn name(&self) -> &str {
        "sub"
    }

    fn arity(&self) -> Arity {
        Arity::AtLeast(2)
    }

    fn execute(&self, arguments: &[String]) -> FunctionResult<String> {
        let difference = fold_decimals(arguments, |difference, value| Ok(difference - value))?;
        Ok(to_decimal_string(&difference))
    }
}

/// Multiplies a series of numbers.
///
/// The scale of the product is the sum of the operands' scales, so
/// `mult(2.5, 2)` yields `5.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiply;

impl Function for Multiply {
    fn name(&self) -> &str {
        "mult"
    }

    fn arity(&self) -> Arity {
        Arity::AtLeast(2)
    }

    fn execute(&self, arguments: &[String]) -> FunctionResult<String> {
        let product = fold_decimals(arguments, |product, value| Ok(product * value))?;
        Ok(to_decimal_string(&product))
    }
}

/// Divides the first number by every following number in turn.
///
/// Each intermediate quotient is rounded half-up to eight fractional digits.
/// Trailing zeros are stripped once, after the last division.
///
/// # Errors
/// Fails with [`FunctionError::Arithmetic`] on division by zero.
///
/// # Example
/// ```
/// use calculator::interpreter::evaluator::function::{arithmetic::Divide, core::Function};
///
/// let args = ["100".to_string(), "3".to_string()];
/// assert_eq!(Divide.execute(&args).unwrap(), "33.33333333");
///
/// let args = ["20".to_string(), "2".to_string(), "5".to_string()];
/// assert_eq!(Divide.execute(&args).unwrap(), "2");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Divide;

impl Function for Divide {
    fn name(&self) -> &str {
        "div"
    }

    fn arity(&self) -> Arity {
        Arity::AtLeast(2)
    }

    fn execute(&self, arguments: &[String]) -> FunctionResult<String> {
        let quotient = fold_decimals(arguments, |quotient, value| divide_scaled(&quotient, value))?;
        Ok(to_decimal_string(&strip_trailing_zeros(&quotient)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(function: &dyn Function, arguments: &[&str]) -> FunctionResult<String> {
        let arguments = arguments.iter().map(ToString::to_string).collect::<Vec<_>>();
        function.execute(&arguments)
    }

    #[test]
    fn addition() {
        assert_eq!(run(&Add, &["5", "3", "2"]).unwrap(), "10");
        assert_eq!(run(&Add, &["5.335", "3.1"]).unwrap(), "8.435");
        assert_eq!(run(&Add, &["5", "-10"]).unwrap(), "-5");
    }

    #[test]
    fn subtraction() {
        assert_eq!(run(&Subtract, &["10", "2", "3"]).unwrap(), "5");
        assert_eq!(run(&Subtract, &["2.2", "3.21"]).unwrap(), "-1.01");
        assert_eq!(run(&Subtract, &["5", "-10"]).unwrap(), "15");
    }

    #[test]
    fn multiplication() {
        assert_eq!(run(&Multiply, &["3", "3", "10"]).unwrap(), "90");
        assert_eq!(run(&Multiply, &["2.5", "2"]).unwrap(), "5.0");
        assert_eq!(run(&Multiply, &["5", "-10"]).unwrap(), "-50");
    }

    #[test]
    fn division() {
        assert_eq!(run(&Divide, &["20", "2", "5"]).unwrap(), "2");
        assert_eq!(run(&Divide, &["10.4", "4"]).unwrap(), "2.6");
        assert_eq!(run(&Divide, &["5", "-10"]).unwrap(), "-0.5");
        assert_eq!(run(&Divide, &["100", "3"]).unwrap(), "33.33333333");
        assert_eq!(run(&Divide, &["100", "5"]).unwrap(), "20");
    }

    #[test]
    fn division_rounds_every_step() {
        // 0.33333333 / 0.5, not 2/3 rounded once
        assert_eq!(run(&Divide, &["1", "3", "0.5"]).unwrap(), "0.66666666");
    }

    #[test]
    fn division_by_zero_fails() {
        let err = run(&Divide, &["10", "0"]).unwrap_err();
        assert!(matches!(err, FunctionError::Arithmetic { .. }));
    }

    #[test]
    fn invalid_argument_is_named() {
        for function in [&Add as &dyn Function, &Subtract, &Multiply, &Divide] {
            assert_eq!(run(function, &["3", "a"]).unwrap_err(),
                       FunctionError::InvalidNumber { argument: "a".to_string() });
        }
    }

    #[test]
    fn first_failure_in_argument_order_wins() {
        let err = run(&Divide, &["1", "0", "x"]).unwrap_err();
        assert!(matches!(err, FunctionError::Arithmetic { .. }));

        let err = run(&Divide, &["1", "y", "0"]).unwrap_err();
        assert_eq!(err, FunctionError::InvalidNumber { argument: "y".to_string() });
    }

    #[test]
    fn empty_argument_list_reports_missing_first_argument() {
        for function in [&Add as &dyn Function, &Subtract, &Multiply, &Divide] {
            assert_eq!(run(function, &[]).unwrap_err(),
                       FunctionError::MissingArgument { position: 1 });
        }
    }

    #[test]
    fn huge_results_use_exponent_notation() {
        assert_eq!(run(&Multiply, &["1e5000", "1"]).unwrap(), "1E+5000");
        assert_eq!(run(&Divide, &["1", "1e-5000"]).unwrap(), "1E+5000");
    }
}
