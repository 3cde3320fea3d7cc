/// Evaluation errors.
///
/// Defines all error types that can occur while the evaluator walks an
/// expression: malformed calls, unknown functions, arity violations, and
/// failures raised by a function's execution rule.
pub mod evaluation_error;
/// Function execution errors.
///
/// Contains the errors a function can raise while executing over its already
/// evaluated arguments, such as an argument that is not a valid number or a
/// division by zero.
pub mod function_error;

pub use evaluation_error::EvaluationError;
pub use function_error::FunctionError;
