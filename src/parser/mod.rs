use thiserror::Error;

use crate::{
    ast::Expression,
    lexer::{Token, tokenize},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("invalid expression format")]
    MalformedExpression(usize),
}

/// Splits `source` into an expression. The operator is kept as raw text and
/// only checked when the expression is evaluated.
pub fn produce_ast(source: &str) -> Result<Expression, ParserError> {
    let tokens = tokenize(source);
    let count = tokens.len();

    let Ok([left, operator, right]) = <[Token; 3]>::try_from(tokens) else {
        return Err(ParserError::MalformedExpression(count));
    };

    Ok(Expression {
        left,
        operator,
        right,
    })
}
