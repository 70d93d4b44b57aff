pub mod binary;

use std::fmt;

use crate::lexer::Token;

/// A single `operand operator operand` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub left: Token,
    pub operator: Token,
    pub right: Token,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left.value, self.operator.value, self.right.value)
    }
}
