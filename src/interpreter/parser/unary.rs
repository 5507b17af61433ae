use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{Parsed, TokenStream},
        },
    },
};

/// Parses a unary expression.
///
/// Negation is right-associative and may repeat, so `--5` parses as
/// `(- (- 5))`. If no `-` is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Parsed> {
    if let Some((Token::Minus, span)) = tokens.peek() {
        tokens.advance();
        tokens.enter(span.start)?;
        let operand = parse_unary(tokens);
        tokens.leave();
        operand?.negate(span.start)
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := literal
///              | "(" expression ")"
/// ```
///
/// # Errors
/// [`ParseError::NoToken`] if the stream is exhausted or the next token cannot
/// start an operand.
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Parsed> {
    match tokens.peek() {
        Some((Token::Literal(value), _)) => {
            tokens.advance();
            Ok(Parsed::leaf(Expr::number(*value)))
        },
        Some((Token::LeftParen, span)) => parse_grouping(tokens, span.start),
        Some((token, span)) => Err(ParseError::NoToken { found:    Some(*token),
                                                         position: span.start, }),
        None => Err(ParseError::NoToken { found:    None,
                                          position: tokens.end(), }),
    }
}

/// Parses a parenthesised expression, `( expression )`, whose `(` sits at
/// `open`.
///
/// The grouping itself leaves no node in the tree; only the inner expression
/// is returned.
///
/// # Errors
/// [`ParseError::UnexpectedToken`] expecting [`Token::RightParen`] if the
/// group is not closed.
fn parse_grouping(tokens: &mut TokenStream<'_>, open: usize) -> ParseResult<Parsed> {
    tokens.advance();
    tokens.enter(open)?;
    let inner = parse_expression(tokens);
    tokens.leave();
    let inner = inner?;

    match tokens.peek() {
        Some((Token::RightParen, _)) => {
            tokens.advance();
            Ok(inner)
        },
        Some((token, span)) => Err(ParseError::UnexpectedToken { found:    Some(*token),
                                                                 expected: Some(Token::RightParen),
                                                                 position: span.start, }),
        None => Err(ParseError::UnexpectedToken { found:    None,
                                                  expected: Some(Token::RightParen),
                                                  position: tokens.end(), }),
    }
}
