use std::collections::HashMap;

use crate::{
    error::{EvaluationError, FunctionError},
    interpreter::evaluator::{
        core::EvalResult,
        function::{
            arithmetic::{Add, Divide, Multiply, Subtract},
            binding::Let,
        },
    },
};

/// Result type returned by a function's execution rule.
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `AtLeast(n)` means the function accepts `n` or more arguments.
/// - `Between(min, max)` means the function accepts `min..=max` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Arity {
    /// The smallest accepted argument count.
    #[must_use]
    pub const fn min(self) -> usize {
        match self {
            Self::Exact(n) | Self::AtLeast(n) | Self::Between(n, _) => n,
        }
    }

    /// The largest accepted argument count, or `None` when unbounded.
    #[must_use]
    pub const fn max(self) -> Option<usize> {
        match self {
            Self::Exact(n) | Self::Between(_, n) => Some(n),
            Self::AtLeast(_) => None,
        }
    }

    /// Validates an argument count against this arity.
    ///
    /// # Parameters
    /// - `function`: Name reported in the error.
    /// - `found`: Number of arguments supplied.
    ///
    /// # Errors
    /// Returns [`EvaluationError::TooFewArguments`] or
    /// [`EvaluationError::TooManyArguments`] naming the violated bound.
    ///
    /// # Example
    /// ```
    /// use calculator::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::AtLeast(2).check("add", 5).is_ok());
    /// assert!(Arity::AtLeast(2).check("add", 1).is_err());
    /// assert!(Arity::Exact(3).check("let", 4).is_err());
    /// ```
    pub fn check(self, function: &str, found: usize) -> EvalResult<()> {
        if found < self.min() {
            return Err(EvaluationError::TooFewArguments { function: function.to_string(),
                                                          min: self.min(),
                                                          found });
        }
        if let Some(max) = self.max()
           && found > max
        {
            return Err(EvaluationError::TooManyArguments { function: function.to_string(),
                                                           max,
                                                           found });
        }
        Ok(())
    }
}

/// How the evaluator turns a call's raw arguments into evaluated ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgumentPolicy {
    /// Every argument is evaluated in the caller's scope, left to right.
    #[default]
    Eager,
    /// The first argument is a variable name and is not evaluated. The
    /// second is evaluated in the caller's scope, and every remaining
    /// argument is evaluated in the caller's scope extended with that
    /// binding.
    Binding,
}

/// A function callable from an expression.
///
/// The execution rule only sees already evaluated arguments; how those were
/// produced from the raw argument text is governed by
/// [`Function::argument_policy`].
pub trait Function: Send + Sync {
    /// The name the function is called by. Matched case-insensitively.
    fn name(&self) -> &str;

    /// The accepted argument counts.
    fn arity(&self) -> Arity;

    /// How the raw arguments are evaluated before [`Function::execute`].
    fn argument_policy(&self) -> ArgumentPolicy {
        ArgumentPolicy::Eager
    }

    /// Computes the result from evaluated arguments.
    ///
    /// # Errors
    /// Returns a [`FunctionError`] if an argument is unusable or the
    /// computation fails.
    fn execute(&self, arguments: &[String]) -> FunctionResult<String>;
}

/// Defines the default functions by generating a name list and a
/// registration routine.
///
/// The macro produces:
/// - `BUILTIN_FUNCTIONS` (public list of builtin names),
/// - `Registry::register_builtins` (registers every entry).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $function:expr
        ),* $(,)?
    ) => {
        /// Names of the functions every evaluator starts with.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];

        impl Registry {
            fn register_builtins(&mut self) {
                $(
                    self.register($function);
                )*
            }
        }
    };
}

builtin_functions! {
    "add"  => Add,
    "sub"  => Subtract,
    "div"  => Divide,
    "mult" => Multiply,
    "let"  => Let,
}

/// Maps lowercased function names to their implementations.
///
/// Registering a name that already exists replaces the earlier function.
/// Functions are never removed.
#[derive(Default)]
pub struct Registry {
    functions: HashMap<String, Box<dyn Function>>,
}

impl Registry {
    /// Creates a registry with no functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every function in [`BUILTIN_FUNCTIONS`].
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    /// Stores `function` under its lowercased name.
    pub fn register(&mut self, function: impl Function + 'static) {
        let name = function.name().to_lowercase();
        log::debug!("registering function '{name}'");
        self.functions.insert(name, Box::new(function));
    }

    /// Looks up a function by name, ignoring case.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&dyn Function> {
        self.functions
            .get(&name.to_lowercase())
            .map(|function| function.as_ref())
    }

    /// Returns the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.functions.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}
