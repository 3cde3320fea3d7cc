use log::{debug, info};

use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::{
            function::core::{ArgumentPolicy, Function, Registry},
            scope::Scope,
        },
        parser::call::{Expression, parse_expression},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Evaluates expressions against a registry of functions.
///
/// An `Evaluator` owns its function registry. It starts with the builtin
/// functions (`add`, `sub`, `mult`, `div`, `let`) and can be extended with
/// [`Evaluator::register_function`].
///
/// ## Usage
///
/// Evaluation takes `&self` and keeps no state between calls, so one
/// evaluator can be shared between threads once all functions are
/// registered. Registration takes `&mut self`, which rules out registering
/// while another thread is evaluating.
///
/// ```
/// use calculator::interpreter::evaluator::core::Evaluator;
///
/// let evaluator = Evaluator::new();
/// assert_eq!(evaluator.evaluate("add(2, mult(3,5))").unwrap(), "17");
/// assert_eq!(evaluator.evaluate("let(a, 5, let(b, mult(a, 10), add(b, a)))").unwrap(), "55");
/// ```
pub struct Evaluator {
    registry: Registry,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with the builtin functions registered.
    #[must_use]
    pub fn new() -> Self {
        Self { registry: Registry::with_builtins() }
    }

    /// Registers a function, replacing any function with the same
    /// (case-insensitive) name.
    pub fn register_function(&mut self, function: impl Function + 'static) {
        self.registry.register(function);
    }

    /// Looks up a registered function by name, ignoring case.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&dyn Function> {
        self.registry.lookup(name)
    }

    /// Names of all registered functions, sorted.
    #[must_use]
    pub fn function_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Evaluates an expression and returns its result.
    ///
    /// All whitespace is removed from the expression before parsing, so
    /// `" add( 3, 4 ) "` and `"add(3,4)"` are the same expression. Evaluation
    /// starts with an empty scope.
    ///
    /// # Errors
    /// Returns the first [`EvaluationError`] encountered anywhere in the
    /// expression. No partial result is produced.
    pub fn evaluate(&self, expression: &str) -> EvalResult<String> {
        info!("evaluating expression: {expression}");

        let stripped = expression.chars()
                                 .filter(|c| !c.is_whitespace())
                                 .collect::<String>();
        let value = self.evaluate_with_scope(&stripped, &Scope::Empty)?;

        info!("{expression}: expression evaluates to final result of {value}");
        Ok(value)
    }

    /// Evaluates one level of an expression and recurses into its arguments.
    ///
    /// A value (no `(`) resolves to its binding in `scope` if there is one,
    /// and to its own text otherwise. A call is parsed, resolved in the
    /// registry, checked for arity, has its arguments evaluated according to
    /// the function's [`ArgumentPolicy`], and is finally executed.
    fn evaluate_with_scope(&self, expression: &str, scope: &Scope<'_>) -> EvalResult<String> {
        debug!("evaluating expression {expression} with variables {scope}");

        let call = match parse_expression(expression)? {
            Expression::Value(text) => {
                let value = scope.resolve(text).unwrap_or(text);
                debug!("{expression}: expression is a single value which evaluates to {value}");
                return Ok(value.to_string());
            },
            Expression::Call(call) => call,
        };
        debug!("{expression}: expression represents function '{}' with arguments {:?}",
               call.name,
               call.arguments);

        let function = self.registry.lookup(&call.name).ok_or_else(|| {
                                                           EvaluationError::UnrecognizedFunction {
                expression: expression.to_string(),
                function:   call.name.clone(),
            }
                                                       })?;

        function.arity().check(function.name(), call.arguments.len())?;

        let evaluated = match function.argument_policy() {
            ArgumentPolicy::Eager => self.evaluate_eagerly(&call.arguments, scope)?,
            ArgumentPolicy::Binding => {
                self.evaluate_binding(expression, function, &call.arguments, scope)?
            },
        };

        debug!("{expression}: executing function {} with evaluated arguments {evaluated:?}",
               call.name);
        let value = function.execute(&evaluated)
                            .map_err(|source| EvaluationError::FunctionFailed { function: call.name
                                                                                              .clone(),
                                                                                source })?;

        debug!("{expression}: expression evaluates to {value}");
        Ok(value)
    }

    /// Evaluates every argument in the caller's scope, left to right.
    fn evaluate_eagerly(&self, arguments: &[&str], scope: &Scope<'_>) -> EvalResult<Vec<String>> {
        arguments.iter()
                 .map(|argument| self.evaluate_with_scope(argument, scope))
                 .collect()
    }

    /// Evaluates the arguments of a binding function.
    ///
    /// The variable name is passed through unevaluated. The value is
    /// evaluated in `scope`; every following argument is evaluated in a new
    /// scope extending `scope` with the binding. The new scope is dropped when
    /// this returns, so the binding never leaks to sibling arguments.
    ///
    /// # Returns
    /// `[name, value, body...]`, ready to be passed to the function.
    fn evaluate_binding(&self,
                        expression: &str,
                        function: &dyn Function,
                        arguments: &[&str],
                        scope: &Scope<'_>)
                        -> EvalResult<Vec<String>> {
        let [name, value, body @ ..] = arguments else {
            return Err(EvaluationError::MalformedBinding { function: function.name().to_string(),
                                                           found:    arguments.len(), });
        };

        let value = self.evaluate_with_scope(value, scope)?;
        debug!("{expression}: variable {name} evaluates to {value}");

        let mut evaluated = Vec::with_capacity(arguments.len());
        evaluated.push((*name).to_string());
        evaluated.push(value.clone());

        let inner = scope.bind(name, &value);
        for argument in body {
            evaluated.push(self.evaluate_with_scope(argument, &inner)?);
        }

        Ok(evaluated)
    }
}
