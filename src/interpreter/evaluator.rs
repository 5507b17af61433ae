use crate::ast::Expr;

/// Evaluates an expression tree to a single `f64`.
///
/// Evaluation is a plain bottom-up walk with one case per node kind. Left
/// operands are evaluated before right ones. Nothing here can fail: division
/// by zero, overflow and `0 / 0` produce infinities and NaN as IEEE-754
/// arithmetic does.
///
/// # Examples
/// ```
/// use arithmetica::{get_ast, interpreter::evaluator::evaluate};
///
/// assert_eq!(evaluate(&get_ast("8 - 3 - 2").unwrap()), 3.0);
/// assert_eq!(evaluate(&get_ast("--5").unwrap()), 5.0);
/// assert_eq!(evaluate(&get_ast("(2 + 3) * 4").unwrap()), 20.0);
/// assert!(evaluate(&get_ast("1 / 0").unwrap()).is_infinite());
/// ```
#[must_use]
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Number { value } => *value,
        Expr::Negate { operand } => -evaluate(operand),
        Expr::Subtract { left, right } => {
            let left = evaluate(left);
            left - evaluate(right)
        },
        Expr::Add { left, right } => evaluate(left) + evaluate(right),
        Expr::Multiply { left, right } => evaluate(left) * evaluate(right),
        Expr::Divide { left, right } => {
            let left = evaluate(left);
            left / evaluate(right)
        },
    }
}
