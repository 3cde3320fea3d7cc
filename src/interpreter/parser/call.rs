use crate::{
    error::EvaluationError,
    interpreter::{evaluator::core::EvalResult, parser::arguments::split_arguments},
};

/// A single level of an expression, re-parsed at each recursion step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression<'a> {
    /// A literal or a variable reference: the text contains no `(`.
    Value(&'a str),
    /// A function call `name(arg, ...)`.
    Call(Call<'a>),
}

/// A function call split into its name and raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call<'a> {
    /// The function name, lowercased.
    pub name:      String,
    /// The unevaluated argument substrings.
    pub arguments: Vec<&'a str>,
}

/// Classifies an expression as a value or a function call.
///
/// The name of a call is everything before the first `(`. The call must end
/// with `)` as its last character; the argument text is whatever lies between
/// the first `(` and that final `)`.
///
/// # Parameters
/// - `expression`: Whitespace-free expression text.
///
/// # Returns
/// The classified [`Expression`].
///
/// # Errors
/// Returns [`EvaluationError::MissingEndBracket`] when a call does not end
/// with `)`.
///
/// # Example
/// ```
/// use calculator::interpreter::parser::call::{Expression, parse_expression};
///
/// assert_eq!(parse_expression("x").unwrap(), Expression::Value("x"));
///
/// let Expression::Call(call) = parse_expression("ADD(1,mult(2,3))").unwrap() else {
///     panic!("expected a call");
/// };
/// assert_eq!(call.name, "add");
/// assert_eq!(call.arguments, vec!["1", "mult(2,3)"]);
///
/// assert!(parse_expression("add(1,2").is_err());
/// ```
pub fn parse_expression(expression: &str) -> EvalResult<Expression<'_>> {
    let Some(open) = expression.find('(') else {
        return Ok(Expression::Value(expression));
    };

    let name = expression[..open].to_lowercase();

    let Some(inner) = expression[open + 1..].strip_suffix(')') else {
        return Err(EvaluationError::MissingEndBracket { expression: expression.to_string(),
                                                        function:   name, });
    };

    Ok(Expression::Call(Call { name,
                               arguments: split_arguments(inner) }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn literal_has_no_parenthesis() {
        assert_eq!(parse_expression("3.5").unwrap(), Expression::Value("3.5"));
        assert_eq!(parse_expression("").unwrap(), Expression::Value(""));
        assert_eq!(parse_expression("a)").unwrap(), Expression::Value("a)"));
    }

    #[test]
    fn name_is_lowercased() {
        let parsed = parse_expression("SuB(3,2)").unwrap();
        assert_eq!(parsed,
                   Expression::Call(Call { name:      "sub".to_string(),
                                           arguments: vec!["3", "2"], }));
    }

    #[test]
    fn empty_argument_list_yields_one_empty_argument() {
        let parsed = parse_expression("add()").unwrap();
        assert_eq!(parsed,
                   Expression::Call(Call { name:      "add".to_string(),
                                           arguments: vec![""], }));
    }

    #[test]
    fn missing_end_bracket_is_reported() {
        let err = parse_expression("add(3,add(3,3").unwrap_err();
        assert_eq!(err,
                   EvaluationError::MissingEndBracket { expression: "add(3,add(3,3".to_string(),
                                                        function:   "add".to_string(), });
    }

    #[test]
    fn lone_open_parenthesis_is_not_its_own_end() {
        assert!(parse_expression("(").is_err());
        assert!(parse_expression("f(").is_err());
    }

    #[test]
    fn trailing_bracket_beyond_call_stays_in_arguments() {
        let Expression::Call(call) = parse_expression("add(3,4))").unwrap() else {
            panic!("expected a call");
        };
        assert_eq!(call.arguments, vec!["3", "4)"]);
    }
}
