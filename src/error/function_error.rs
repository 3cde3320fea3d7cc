#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors a function can raise while executing.
pub enum FunctionError {
    /// An evaluated argument could not be parsed as a decimal number.
    InvalidNumber {
        /// The offending argument text.
        argument: String,
    },
    /// The function was executed without an argument it relies on.
    MissingArgument {
        /// One-based position of the missing argument.
        position: usize,
    },
    /// The arithmetic itself failed, e.g. a division by zero.
    Arithmetic {
        /// Description of the underlying arithmetic failure.
        details: String,
    },
}

impl std::fmt::Display for FunctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { argument } => {
                write!(f, "argument is not a valid number: '{argument}'")
            },
            Self::MissingArgument { position } => write!(f, "missing argument {position}"),
            Self::Arithmetic { details } => write!(f, "{details}"),
        }
    }
}

impl std::error::Error for FunctionError {}
