use crate::error::{ParseError, ScanError};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Why an input could not be computed.
///
/// For a caller that only needs to know the input was malformed, any value of
/// this type means exactly that. The wrapped error says which stage rejected
/// it and where.
pub enum EvalFailure {
    /// The scanner rejected the input.
    Scan(ScanError),
    /// The parser rejected the token stream.
    Parse(ParseError),
}

impl EvalFailure {
    /// Byte offset of the failure in the source.
    ///
    /// # Example
    /// ```
    /// use arithmetica::compute;
    ///
    /// let err = compute("12 + x").unwrap_err();
    /// assert_eq!(err.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Scan(e) => e.position(),
            Self::Parse(e) => e.position(),
        }
    }
}

impl From<ScanError> for EvalFailure {
    fn from(error: ScanError) -> Self {
        Self::Scan(error)
    }
}

impl From<ParseError> for EvalFailure {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl std::fmt::Display for EvalFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scan(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}
