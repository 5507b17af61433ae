use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Spanned,
        parser::{
            binary::parse_additive,
            utils::{Parsed, TokenStream},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token stream into a single expression tree.
///
/// The parser is total-match: after the expression is complete every token
/// must have been consumed, so a valid prefix followed by anything else is
/// rejected.
///
/// # Errors
/// - [`ParseError::NoToken`] when an operand is required but the stream is
///   exhausted or holds an operator or parenthesis instead.
/// - [`ParseError::UnexpectedToken`] for a missing `)` or trailing tokens.
/// - [`ParseError::TooDeep`] when the expression nests deeper than
///   [`MAX_DEPTH`](crate::interpreter::parser::utils::MAX_DEPTH).
///
/// # Examples
/// ```
/// use arithmetica::{
///     error::ParseError,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let ast = parse(&scan("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(ast.to_string(), "(+ 2 (* 3 4))");
///
/// let err = parse(&scan("1 2").unwrap()).unwrap_err();
/// assert!(matches!(err, ParseError::UnexpectedToken { expected: None, position: 2, .. }));
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Expr> {
    let mut stream = TokenStream::new(tokens);
    let parsed = parse_expression(&mut stream)?;

    if let Some((token, span)) = stream.peek() {
        return Err(ParseError::UnexpectedToken { found:    Some(*token),
                                                 expected: None,
                                                 position: span.start, });
    }

    Ok(parsed.expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
pub(crate) fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Parsed> {
    parse_additive(tokens)
}
