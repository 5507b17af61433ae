//! # arithmetica
//!
//! arithmetica is the core of a pocket calculator written in Rust.
//! It scans, parses and evaluates plain-text arithmetic expressions made of
//! numbers, `+ - * /`, unary minus and parentheses. All values are `f64`.
//!
//! Data flows one way: text, tokens, tree, number, display string. Each stage
//! is a plain function with no state carried between calls.

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

use crate::{
    ast::Expr,
    error::EvalFailure,
    interpreter::{
        evaluator::evaluate,
        lexer::{Spanned, scan},
        parser::core::parse,
    },
    util::num::format_number,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum, the tree the parser builds and the
/// evaluator walks. Numbers are the leaves; operators are the inner nodes.
pub mod ast;
/// Provides the error types for scanning and parsing.
///
/// This module defines the errors raised when an input is malformed, together
/// with the byte position at which the problem was found.
///
/// # Responsibilities
/// - Defines one error enum per failing stage (scanner, parser).
/// - Combines them into the single failure type returned by [`compute`].
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module holds the lexer, the parser and the evaluator.
pub mod interpreter;
/// General utilities.
///
/// Currently the number formatter shared by results, tokens and trees.
pub mod util;

/// Computes an input line and returns the result ready for display.
///
/// The input is scanned, parsed and evaluated, then the resulting number is
/// formatted with [`format_number`]. Numeric edge cases are not errors: `1/0`
/// yields `"inf"` and `0/0` yields `"nan"`.
///
/// # Errors
/// Returns an [`EvalFailure`] if the input is malformed. There is no partial
/// result.
///
/// # Examples
/// ```
/// use arithmetica::compute;
///
/// assert_eq!(compute("2 + 3 * 4").unwrap(), "14");
/// assert_eq!(compute("(2 + 3) * 4").unwrap(), "20");
/// assert_eq!(compute("9 / 2").unwrap(), "4.5");
/// assert_eq!(compute("1 / 0").unwrap(), "inf");
///
/// assert!(compute("1 +").is_err());
/// assert!(compute("2 $ 3").is_err());
/// ```
pub fn compute(source: &str) -> Result<String, EvalFailure> {
    let ast = get_ast(source)?;

    Ok(format_number(evaluate(&ast)))
}

/// Scans an input line into tokens and their byte spans.
///
/// # Errors
/// Returns an [`EvalFailure::Scan`] if the input contains an invalid
/// character.
///
/// # Examples
/// ```
/// use arithmetica::get_tokens;
///
/// let tokens = get_tokens("-(1.50)").unwrap();
/// let shown: Vec<String> = tokens.iter().map(|(token, _)| token.to_string()).collect();
/// assert_eq!(shown, ["-", "(", "1.5", ")"]);
/// ```
pub fn get_tokens(source: &str) -> Result<Vec<Spanned>, EvalFailure> {
    Ok(scan(source)?)
}

/// Scans and parses an input line into an expression tree.
///
/// # Errors
/// Returns an [`EvalFailure`] if either scanning or parsing fails.
pub fn get_ast(source: &str) -> Result<Expr, EvalFailure> {
    let tokens = get_tokens(source)?;

    Ok(parse(&tokens)?)
}
