use crate::error::FunctionError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvaluationError {
    /// A function call does not end with its closing parenthesis `)`.
    MissingEndBracket {
        /// The (sub-)expression being evaluated.
        expression: String,
        /// The name of the function being called.
        function:   String,
    },
    /// Called a function that has not been registered.
    UnrecognizedFunction {
        /// The (sub-)expression being evaluated.
        expression: String,
        /// The name of the function.
        function:   String,
    },
    /// Fewer arguments were supplied than the function accepts.
    TooFewArguments {
        /// The name of the function.
        function: String,
        /// The minimum number of arguments the function accepts.
        min:      usize,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// More arguments were supplied than the function accepts.
    TooManyArguments {
        /// The name of the function.
        function: String,
        /// The maximum number of arguments the function accepts.
        max:      usize,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// A binding function was called without a variable name and value.
    MalformedBinding {
        /// The name of the function.
        function: String,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// The function's execution rule failed.
    FunctionFailed {
        /// The name of the function.
        function: String,
        /// The failure reported by the function.
        source:   FunctionError,
    },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEndBracket { expression, function } => {
                write!(f, "{expression}: missing end bracket for function: {function}")
            },
            Self::UnrecognizedFunction { expression, function } => {
                write!(f, "{expression}: unrecognized function: {function}")
            },
            Self::TooFewArguments { function, min, found } => write!(f,
                                                                     "Function {function} requires at least {min} arguments but only {found} provided"),
            Self::TooManyArguments { function, max, found } => write!(f,
                                                                      "Function {function} supports at most {max} arguments but {found} provided"),
            Self::MalformedBinding { function, found } => write!(f,
                                                                 "Function {function} binds a variable and needs a name and a value, but {found} arguments provided"),
            Self::FunctionFailed { function, source } => {
                write!(f, "an error occurred executing function {function}: {source}")
            },
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FunctionFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
