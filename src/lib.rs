//! # calculator
//!
//! calculator evaluates nested, Lisp-style function-call expressions such as
//! `add(2, mult(3, 5))` over arbitrary-precision decimal numbers. Expressions
//! may bind variables with `let(name, value, expression)`, and new functions
//! can be registered alongside the builtin `add`, `sub`, `mult`, `div` and
//! `let`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::core::Evaluator;

/// Provides the error types for evaluation and function execution.
///
/// This module defines every error that evaluating an expression can raise.
/// Function errors come from a function's execution rule; evaluation errors
/// come from the evaluator itself and wrap function errors with the name of
/// the failing function.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parsing, lookup, arity,
///   execution).
/// - Produces human readable messages naming the offending expression,
///   function, or argument.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates parsing and evaluation of expressions.
///
/// This module ties together the parser, the evaluator, scopes, and the
/// function registry, and exposes the public API for evaluating expressions
/// and registering functions.
///
/// # Responsibilities
/// - Coordinates the parser and the evaluator.
/// - Provides the `Evaluator` entry point and the `Function` extension
///   trait.
/// - Manages the flow of values and errors between recursion levels.
pub mod interpreter;
/// General utilities for decimal arithmetic.
///
/// This module provides the decimal helpers the builtin functions share:
/// strict parsing, fixed-scale division, and plain rendering.
pub mod util;

/// Evaluates an expression with a fresh evaluator and returns its result.
///
/// # Errors
/// Returns an error if the expression is malformed, calls an unknown
/// function, passes the wrong number of arguments, or a function fails.
///
/// # Examples
/// ```
/// use calculator::get_result;
///
/// assert_eq!(get_result("add(2, mult(3,5))").unwrap(), "17");
///
/// // Unknown function
/// assert!(get_result("pow(2, 3)").is_err());
/// ```
pub fn get_result(expression: &str) -> Result<String, Box<dyn std::error::Error>> {
    Ok(Evaluator::new().evaluate(expression)?)
}
