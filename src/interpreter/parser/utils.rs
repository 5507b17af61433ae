use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Spanned, parser::core::ParseResult},
};

/// Deepest expression the parser accepts.
///
/// Bounds both the number of `-` and `(` open at once while parsing and the
/// height of the resulting tree, so walking, printing and dropping a parsed
/// tree always fits on the stack.
pub const MAX_DEPTH: usize = 512;

/// A forward-only cursor over scanned tokens.
///
/// Rules look one token ahead with [`TokenStream::peek`] and consume with
/// [`TokenStream::advance`]; nothing is ever visited twice. The stream also
/// remembers where the last token ended, so errors raised at the end of input
/// can still point somewhere useful, and how many `-` and `(` rules are
/// currently open.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: Peekable<Iter<'a, Spanned>>,
    end:    usize,
    depth:  usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub fn new(tokens: &'a [Spanned]) -> Self {
        let end = tokens.last().map_or(0, |(_, span)| span.end);
        Self { tokens: tokens.iter().peekable(),
               end,
               depth: 0 }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a Spanned> {
        self.tokens.peek().copied()
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<&'a Spanned> {
        self.tokens.next()
    }

    /// Byte offset just past the last token.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Opens one nesting level for the token at `position`.
    ///
    /// # Errors
    /// [`ParseError::TooDeep`] if [`MAX_DEPTH`] levels are already open.
    pub const fn enter(&mut self, position: usize) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH,
                                             position });
        }
        self.depth += 1;
        Ok(())
    }

    /// Closes the level opened by the matching [`TokenStream::enter`].
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// A subtree produced by a grammar rule, with its height in nodes.
#[derive(Debug)]
pub(crate) struct Parsed {
    pub(crate) expr:   Expr,
    pub(crate) height: usize,
}

impl Parsed {
    pub(crate) const fn leaf(expr: Expr) -> Self {
        Self { expr,
               height: 1 }
    }

    /// Wraps the subtree in a negation applied by the `-` at `position`.
    pub(crate) fn negate(self, position: usize) -> ParseResult<Self> {
        let height = checked_height(self.height + 1, position)?;
        Ok(Self { expr: Expr::negate(self.expr),
                  height })
    }

    /// Joins two subtrees under the binary operator at `position`.
    pub(crate) fn join(build: fn(Expr, Expr) -> Expr,
                       left: Self,
                       right: Self,
                       position: usize)
                       -> ParseResult<Self> {
        let height = checked_height(left.height.max(right.height) + 1, position)?;
        Ok(Self { expr: build(left.expr, right.expr),
                  height })
    }
}

const fn checked_height(height: usize, position: usize) -> ParseResult<usize> {
    if height > MAX_DEPTH {
        return Err(ParseError::TooDeep { limit: MAX_DEPTH,
                                         position });
    }
    Ok(height)
}
