/// Core evaluation logic.
///
/// Contains the dual-stack machine that consumes tokens, resolves precedence
/// and grouping, and drains the stacks at the end of input.
pub mod core;

/// Operator application.
///
/// Applies a single binary operator to two operands with overflow and
/// division-by-zero checks.
pub mod apply;
