/// Core evaluation logic.
///
/// Contains the `Evaluator`, its recursive evaluation step, argument
/// evaluation per function policy, and error propagation.
pub mod core;

/// Variable scopes introduced by binding functions.
///
/// Scopes form an additive chain; each binding is visible only inside the
/// expression that introduced it.
pub mod scope;

/// Function evaluation.
///
/// Defines the `Function` trait, arities, argument policies, the function
/// registry, and the builtin functions.
pub mod function;
