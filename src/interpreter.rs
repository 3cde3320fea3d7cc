/// The evaluator module computes the result of an expression.
///
/// The evaluator re-parses each level of an expression, resolves variables
/// and functions, evaluates arguments recursively, and executes functions on
/// the evaluated values. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Resolves literals and variable references against the current scope.
/// - Looks up functions, validates arity, and evaluates arguments.
/// - Reports evaluation errors such as unknown functions or bad arguments.
pub mod evaluator;
/// The parser module recognises the structure of one expression level.
///
/// There is no token stream and no tree: the parser finds the function name
/// before the first `(`, checks that the call ends with `)`, and splits the
/// text in between on top-level commas. Nested calls are left as raw text
/// for the evaluator to recurse into.
///
/// # Responsibilities
/// - Distinguishes values from function calls.
/// - Splits argument lists, respecting nested parentheses.
/// - Rejects calls that are missing their closing parenthesis.
pub mod parser;
