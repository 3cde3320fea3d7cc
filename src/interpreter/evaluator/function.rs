/// Arithmetic functions over decimal arguments.
///
/// `add`, `sub`, `mult` and `div` fold their arguments left to right.
pub mod arithmetic;
/// The `let` function, which binds a variable for its body expression.
pub mod binding;

pub mod core;
