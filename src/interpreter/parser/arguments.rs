/// Splits a comma-separated argument list on its top-level commas.
///
/// The input is the text strictly between a call's outer parentheses. The
/// scan keeps a nesting depth that `(` increments and `)` decrements; a comma
/// is a split point only at depth zero. The segment after the last top-level
/// comma is always emitted, so an empty input yields a single empty argument
/// and it is up to arity validation to reject it.
///
/// Unbalanced parentheses are not reported here, but a stray `)` leaves the
/// depth negative, so no later comma splits: the malformed text stays in one
/// argument and fails further down.
///
/// # Parameters
/// - `arguments`: Text between the parentheses of a call.
///
/// # Returns
/// The raw, unevaluated argument substrings in order.
///
/// # Example
/// ```
/// use calculator::interpreter::parser::arguments::split_arguments;
///
/// assert_eq!(split_arguments("2,mult(3,5)"), vec!["2", "mult(3,5)"]);
/// assert_eq!(split_arguments(""), vec![""]);
/// ```
#[must_use]
pub fn split_arguments(arguments: &str) -> Vec<&str> {
    let mut depth: isize = 0;
    let mut start = 0;
    let mut split = Vec::new();

    for (index, byte) in arguments.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b',' if depth == 0 => {
                split.push(&arguments[start..index]);
                start = index + 1;
            },
            _ => {},
        }
    }
    split.push(&arguments[start..]);

    split
}
