/// Splits the text between a call's parentheses into raw arguments.
///
/// Only commas at nesting depth zero separate arguments; commas inside a
/// nested call belong to that call.
pub mod arguments;
/// Recognises whether an expression is a plain value or a function call.
///
/// Extracts the lowercased function name and the raw argument substrings of a
/// call, and rejects calls that do not end with their closing parenthesis.
pub mod call;
