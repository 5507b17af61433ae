use std::ops::Range;

use logos::Logos;

use crate::{error::ScanError, util::num::format_number};

/// Byte range of a token in the scanned source.
pub type Span = Range<usize>;

/// A token paired with the bytes it was read from.
pub type Spanned = (Token, Span);

/// Represents a lexical token in the source input.
///
/// Whitespace (space, tab, carriage return and newline) is skipped by the
/// lexer and never becomes a token.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_literal)]
    #[regex(r"\.[0-9]+", parse_literal)]
    Literal(f64),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Minus => write!(f, "-"),
            Self::Plus => write!(f, "+"),
            Self::Slash => write!(f, "/"),
            Self::Star => write!(f, "*"),
            Self::Literal(value) => write!(f, "{}", format_number(*value)),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// The slice always matches the literal grammar, so the only way this can fail
/// is a run of digits too long to fit in a finite `f64`. Returning `None` turns
/// such a literal into a lexer error.
fn parse_literal(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice()
       .parse::<f64>()
       .ok()
       .filter(|value| value.is_finite())
}

/// Scans `source` into a flat list of tokens.
///
/// Scanning is a single left-to-right pass that stops at the first character
/// the language does not know. Every token carries the byte span it came from;
/// error positions are byte offsets as well.
///
/// # Errors
/// Returns [`ScanError::InvalidToken`] for the first unrecognised character,
/// or for a literal that overflows `f64`. No tokens are returned alongside
/// the error.
///
/// # Examples
/// ```
/// use arithmetica::{
///     error::ScanError,
///     interpreter::lexer::{Token, scan},
/// };
///
/// let tokens = scan("(1.5 + 2)").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
/// assert_eq!(kinds,
///            vec![Token::LeftParen,
///                 Token::Literal(1.5),
///                 Token::Plus,
///                 Token::Literal(2.0),
///                 Token::RightParen]);
///
/// let err = scan("1+#2").unwrap_err();
/// assert!(matches!(err, ScanError::InvalidToken { character: '#', position: 2 }));
/// ```
pub fn scan(source: &str) -> Result<Vec<Spanned>, ScanError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        if let Ok(tok) = token {
            tokens.push((tok, span));
        } else {
            let character = source.get(span.start..)
                                  .and_then(|rest| rest.chars().next())
                                  .unwrap_or_default();
            return Err(ScanError::InvalidToken { character,
                                                 position: span.start });
        }
    }

    Ok(tokens)
}
