#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during scanning.
pub enum ScanError {
    /// Found a character that does not belong to any token.
    InvalidToken {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
}

impl ScanError {
    /// Byte offset at which scanning stopped.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidToken { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { character, position } => {
                write!(f, "Error at position {position}: Invalid token '{}'.", character.escape_default())
            },
        }
    }
}

impl std::error::Error for ScanError {}
