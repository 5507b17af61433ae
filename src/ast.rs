use crate::util::num::format_number;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Leaves are always [`Expr::Number`]; every other variant owns its operands
/// exclusively. Trees are built bottom-up by the parser and never change
/// afterwards.
///
/// The `Display` impl renders the tree as an S-expression, which is handy when
/// checking how an input was grouped:
///
/// ```
/// use arithmetica::get_ast;
///
/// let ast = get_ast("1 - 2 * -3").unwrap();
/// assert_eq!(ast.to_string(), "(- 1 (* 2 (- 3)))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The constant value.
        value: f64,
    },
    /// Arithmetic negation, `-operand`.
    Negate {
        /// The operand expression.
        operand: Box<Self>,
    },
    /// `left - right`.
    Subtract {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `left + right`.
    Add {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `left * right`.
    Multiply {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `left / right`.
    Divide {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::Number`] leaf.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value }
    }

    /// Builds a [`Expr::Negate`] node.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::Negate { operand: Box::new(operand) }
    }

    /// Builds a [`Expr::Subtract`] node.
    #[must_use]
    pub fn subtract(left: Self, right: Self) -> Self {
        Self::Subtract { left:  Box::new(left),
                         right: Box::new(right), }
    }

    /// Builds a [`Expr::Add`] node.
    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::Add { left:  Box::new(left),
                    right: Box::new(right), }
    }

    /// Builds a [`Expr::Multiply`] node.
    #[must_use]
    pub fn multiply(left: Self, right: Self) -> Self {
        Self::Multiply { left:  Box::new(left),
                         right: Box::new(right), }
    }

    /// Builds a [`Expr::Divide`] node.
    #[must_use]
    pub fn divide(left: Self, right: Self) -> Self {
        Self::Divide { left:  Box::new(left),
                       right: Box::new(right), }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{}", format_number(*value)),
            Self::Negate { operand } => write!(f, "(- {operand})"),
            Self::Subtract { left, right } => write!(f, "(- {left} {right})"),
            Self::Add { left, right } => write!(f, "(+ {left} {right})"),
            Self::Multiply { left, right } => write!(f, "(* {left} {right})"),
            Self::Divide { left, right } => write!(f, "(/ {left} {right})"),
        }
    }
}
