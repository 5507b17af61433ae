/// Scanning errors.
///
/// Raised while turning source text into tokens, when a character is found that
/// cannot start or continue any token.
pub mod scan_error;
/// Parsing errors.
///
/// Raised while building the expression tree, when the token stream runs out
/// too early or holds a token that does not fit the grammar.
pub mod parse_error;
/// The combined failure of a whole computation.
///
/// Wraps either stage error so callers of [`crate::compute`] deal with a single
/// type.
pub mod eval_failure;

pub use eval_failure::EvalFailure;
pub use parse_error::ParseError;
pub use scan_error::ScanError;
