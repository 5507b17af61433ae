/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the AST bottom-up and applies `f64` arithmetic at every
/// node. It has no state and cannot fail.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw text and produces a flat list of tokens, each
/// paired with its byte span. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into operator, parenthesis and number
///   tokens.
/// - Skips whitespace.
/// - Reports the first character that cannot be scanned.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per grammar rule, honouring
/// operator precedence and left associativity.
///
/// # Responsibilities
/// - Converts tokens into a single expression tree.
/// - Rejects missing operands, unclosed groups and trailing input.
pub mod parser;
