/// Entry points of the parser.
///
/// Holds the total-match [`core::parse`] driver and the top-level expression
/// rule every nested rule eventually recurses back into.
pub mod core;

/// Binary operator parsing.
///
/// Left-associative folds for the additive (`+`, `-`) and multiplicative
/// (`*`, `/`) precedence levels.
pub mod binary;

/// Unary and primary parsing.
///
/// Prefix negation, number literals and parenthesised groups.
pub mod unary;

/// The token cursor shared by all grammar rules.
pub mod utils;
