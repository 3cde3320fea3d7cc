use crate::{
    error::FunctionError,
    interpreter::evaluator::function::core::{ArgumentPolicy, Arity, Function, FunctionResult},
};

/// Binds a variable for the duration of one expression:
/// `let(name, value, body)`.
///
/// The evaluator does the work through [`ArgumentPolicy::Binding`]: `value`
/// is evaluated in the caller's scope and `body` in the caller's scope plus
/// `name = value`. Executing `let` then returns the evaluated body
/// unchanged.
///
/// # Example
/// ```
/// use calculator::interpreter::evaluator::function::{binding::Let, core::Function};
///
/// let args = ["a".to_string(), "5".to_string(), "55".to_string()];
/// assert_eq!(Let.execute(&args).unwrap(), "55");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Let;

impl Function for Let {
    fn name(&self) -> &str {
        "let"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(3)
    }

    fn argument_policy(&self) -> ArgumentPolicy {
        ArgumentPolicy::Binding
    }

    fn execute(&self, arguments: &[String]) -> FunctionResult<String> {
        arguments.get(2)
                 .cloned()
                 .ok_or(FunctionError::MissingArgument { position: 3 })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn returns_body_verbatim() {
        let args = vec!["x".to_string(), "1".to_string(), "not-a-number".to_string()];
        assert_eq!(Let.execute(&args).unwrap(), "not-a-number");
    }

    #[test]
    fn declares_binding_policy_and_three_arguments() {
        assert_eq!(Let.argument_policy(), ArgumentPolicy::Binding);
        assert_eq!(Let.arity(), Arity::Exact(3));
    }

    #[test]
    fn missing_body_is_reported() {
        let args = vec!["x".to_string(), "1".to_string()];
        assert_eq!(Let.execute(&args).unwrap_err(), FunctionError::MissingArgument { position: 3 });
    }
}
