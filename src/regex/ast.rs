//! Regex ast.
//!
//! # Grammar
//!
//! ```ebnf
//!     expression ::= sub_expression (UNION expression)?;
//!     sub_expression ::= sub_expression_item (DOT? sub_expression_item)*;
//!     sub_expression_item ::= (match | group) STAR*;
//!     group ::= LEFT_PAREN expression? RIGHT_PAREN;
//!     match ::= SYMBOL | EPSILON;
//! ```

pub(crate) struct Ast(pub(crate) ExprKind);

/// Regular expression kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExprKind {
    /// Concatenation of regular expressions.
    Concat(Vec<ExprKind>),
    /// The empty string (e.g., `λ`, `()`).
    Empty,
    /// The empty language. Only produced for an input without any tokens.
    Void,
    /// An alternative expression (e.g., `<expression> + <expression>`).
    Alt(Box<ExprKind>, Box<ExprKind>),
    /// A single symbol.
    Lit(char),
    /// Kleene closure of an expression (e.g., `a*`, `(ab)*`).
    Star(Box<ExprKind>),
    /// A parenthesized expression.
    Group(Box<ExprKind>),
}

impl ExprKind {
    /// Wraps the expression in a [`Star`](ExprKind::Star).
    pub(crate) fn star(self) -> Self {
        ExprKind::Star(Box::new(self))
    }
}
