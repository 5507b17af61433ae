use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::parse_unary,
            utils::{Parsed, TokenStream},
        },
    },
};

/// Builds the node for one binary operator.
type BinaryBuilder = fn(Expr, Expr) -> Expr;

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `8 - 3 - 2`
/// groups as `(8 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// An `Expr::Add` / `Expr::Subtract` tree, or the multiplicative operand alone
/// when no operator follows.
pub(crate) fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Parsed> {
    let mut left = parse_multiplicative(tokens)?;
    while let Some((build, position)) = next_operator(tokens, additive_operator) {
        tokens.advance();
        let right = parse_multiplicative(tokens)?;
        left = Parsed::join(build, left, right, position)?;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub(crate) fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Parsed> {
    let mut left = parse_unary(tokens)?;
    while let Some((build, position)) = next_operator(tokens, multiplicative_operator) {
        tokens.advance();
        let right = parse_unary(tokens)?;
        left = Parsed::join(build, left, right, position)?;
    }
    Ok(left)
}

/// Peeks at the next token and, if `operator` accepts it, returns its builder
/// and byte offset.
fn next_operator(tokens: &mut TokenStream<'_>,
                 operator: fn(Token) -> Option<BinaryBuilder>)
                 -> Option<(BinaryBuilder, usize)> {
    tokens.peek()
          .and_then(|(token, span)| operator(*token).map(|build| (build, span.start)))
}

fn additive_operator(token: Token) -> Option<BinaryBuilder> {
    match token {
        Token::Plus => Some(Expr::add),
        Token::Minus => Some(Expr::subtract),
        _ => None,
    }
}

fn multiplicative_operator(token: Token) -> Option<BinaryBuilder> {
    match token {
        Token::Star => Some(Expr::multiply),
        Token::Slash => Some(Expr::divide),
        _ => None,
    }
}
