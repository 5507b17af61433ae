use arithmetica::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, scan},
        parser::{core::parse, utils::MAX_DEPTH},
    },
};

fn parse_src(src: &str) -> Result<Expr, ParseError> {
    let tokens = scan(src).unwrap_or_else(|e| panic!("Scanning {src:?} failed: {e}"));
    parse(&tokens)
}

fn tree(src: &str) -> String {
    parse_src(src).unwrap_or_else(|e| panic!("Parsing {src:?} failed: {e}"))
                  .to_string()
}

#[test]
fn single_number() {
    assert_eq!(parse_src("42").unwrap(), Expr::number(42.0));
}

#[test]
fn subtraction_folds_left() {
    assert_eq!(parse_src("8-3-2").unwrap(),
               Expr::subtract(Expr::subtract(Expr::number(8.0), Expr::number(3.0)),
                              Expr::number(2.0)));
    assert_eq!(tree("1+2-3+4"), "(+ (- (+ 1 2) 3) 4)");
    assert_eq!(tree("8/4*2/1"), "(/ (* (/ 8 4) 2) 1)");
}

#[test]
fn negation_nests_right() {
    assert_eq!(parse_src("--5").unwrap(),
               Expr::negate(Expr::negate(Expr::number(5.0))));
    assert_eq!(tree("-2*-3"), "(* (- 2) (- 3))");
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(tree("2+3*4"), "(+ 2 (* 3 4))");
    assert_eq!(tree("(2+3)*4"), "(* (+ 2 3) 4)");
    assert_eq!(tree("1-6/3"), "(- 1 (/ 6 3))");
    assert_eq!(tree("-(1+2)"), "(- (+ 1 2))");
}

#[test]
fn parentheses_leave_no_node() {
    assert_eq!(parse_src("(((7)))").unwrap(), Expr::number(7.0));
}

#[test]
fn empty_stream_is_no_token() {
    assert_eq!(parse(&[]), Err(ParseError::NoToken { found:    None,
                                                     position: 0, }));
}

#[test]
fn missing_operand_is_no_token() {
    assert_eq!(parse_src("1+"),
               Err(ParseError::NoToken { found:    None,
                                         position: 2, }));
    assert_eq!(parse_src("1 - "),
               Err(ParseError::NoToken { found:    None,
                                         position: 3, }));
    assert_eq!(parse_src("1 * * 2"),
               Err(ParseError::NoToken { found:    Some(Token::Star),
                                         position: 4, }));
    assert_eq!(parse_src("()"),
               Err(ParseError::NoToken { found:    Some(Token::RightParen),
                                         position: 1, }));
    assert_eq!(parse_src(")"),
               Err(ParseError::NoToken { found:    Some(Token::RightParen),
                                         position: 0, }));
}

#[test]
fn unclosed_group_is_unexpected_token() {
    assert_eq!(parse_src("(1+2"),
               Err(ParseError::UnexpectedToken { found:    None,
                                                 expected: Some(Token::RightParen),
                                                 position: 4, }));
    assert_eq!(parse_src("(1 2)"),
               Err(ParseError::UnexpectedToken { found:    Some(Token::Literal(2.0)),
                                                 expected: Some(Token::RightParen),
                                                 position: 3, }));
}

#[test]
fn trailing_tokens_are_unexpected() {
    assert_eq!(parse_src("1 2"),
               Err(ParseError::UnexpectedToken { found:    Some(Token::Literal(2.0)),
                                                 expected: None,
                                                 position: 2, }));
    assert_eq!(parse_src("(1)(2)"),
               Err(ParseError::UnexpectedToken { found:    Some(Token::LeftParen),
                                                 expected: None,
                                                 position: 3, }));
    assert_eq!(parse_src("1+2)"),
               Err(ParseError::UnexpectedToken { found:    Some(Token::RightParen),
                                                 expected: None,
                                                 position: 3, }));
}

#[test]
fn error_messages_name_the_position() {
    let err = parse_src("(1+2").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 4: Expected ')' but the input ended.");

    let err = parse_src("1 2").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 2: Extra tokens after expression, starting at '2'.");
}

#[test]
fn long_run_of_negations_is_too_deep() {
    let src = format!("{}5", "-".repeat(100_000));
    assert_eq!(parse_src(&src),
               Err(ParseError::TooDeep { limit:    MAX_DEPTH,
                                         position: MAX_DEPTH, }));
}

#[test]
fn deep_parentheses_are_too_deep() {
    let src = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert!(matches!(parse_src(&src), Err(ParseError::TooDeep { .. })));
}

#[test]
fn long_operator_chain_is_too_deep() {
    let src = vec!["1"; 100_000].join("+");
    assert!(matches!(parse_src(&src), Err(ParseError::TooDeep { .. })));
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let negations = format!("{}5", "-".repeat(MAX_DEPTH - 1));
    assert!(parse_src(&negations).is_ok());

    let groups = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert_eq!(parse_src(&groups).unwrap(), Expr::number(1.0));

    let chain = vec!["2"; MAX_DEPTH].join("*");
    assert!(parse_src(&chain).is_ok());
}
