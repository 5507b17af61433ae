use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents all errors that can occur during parsing.
///
/// Positions are byte offsets into the scanned source. When the token stream is
/// exhausted the position is the end of the last token.
pub enum ParseError {
    /// An operand was needed but none was available.
    NoToken {
        /// The token sitting where the operand should be, or `None` if the
        /// stream ran out.
        found:    Option<Token>,
        /// Where the operand was expected.
        position: usize,
    },
    /// A token does not fit the grammar at its position.
    UnexpectedToken {
        /// The token encountered, or `None` if the stream ran out.
        found:    Option<Token>,
        /// The token the grammar required here, or `None` if the expression
        /// was already complete.
        expected: Option<Token>,
        /// Where the problem was found.
        position: usize,
    },
    /// The expression nests deeper than the parser allows.
    TooDeep {
        /// The deepest nesting accepted.
        limit:    usize,
        /// The `-`, `(` or operator that went past the limit.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset at which parsing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::NoToken { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::TooDeep { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoToken { found: Some(token),
                            position, } => {
                write!(f, "Error at position {position}: Expected a number but found '{token}'.")
            },
            Self::NoToken { found: None,
                            position, } => {
                write!(f, "Error at position {position}: Expected a number but the input ended.")
            },
            Self::UnexpectedToken { found: Some(token),
                                    expected: Some(expected),
                                    position, } => write!(f,
                                                          "Error at position {position}: Expected '{expected}' but found '{token}'."),
            Self::UnexpectedToken { found: None,
                                    expected: Some(expected),
                                    position, } => write!(f,
                                                          "Error at position {position}: Expected '{expected}' but the input ended."),
            Self::UnexpectedToken { found: Some(token),
                                    expected: None,
                                    position, } => write!(f,
                                                          "Error at position {position}: Extra tokens after expression, starting at '{token}'."),
            Self::UnexpectedToken { found: None,
                                    expected: None,
                                    position, } => {
                write!(f, "Error at position {position}: Unexpected token.")
            },
            Self::TooDeep { limit, position } => write!(f,
                                                        "Error at position {position}: Expression nests deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
