use std::ops::RangeInclusive;

use thiserror::Error;
use tracing::debug;

use crate::{
    ast::{
        Expression,
        binary::{ASTError, BinaryOperator},
    },
    lexer::{Token, TokenType},
    numerals::roman_to_arabic,
    parser::{ParserError, produce_ast},
    runtime::values::EvaluationResult,
};

pub const OPERAND_RANGE: RangeInclusive<i64> = 1..=10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("{0}")]
    Parser(ParserError),
    #[error("{0}")]
    AST(ASTError),
    #[error("invalid number format: {0}")]
    InvalidOperand(String),
    #[error("the entered number must be from 1 to 10 inclusive")]
    OperandOutOfRange(i64, i64),
    #[error("either only Arabic or Roman numerals are allowed")]
    MixedNumeralSystems,
    #[error("invalid operation: {0}")]
    UnknownOperator(String),
}

impl From<ParserError> for CalcError {
    fn from(value: ParserError) -> Self {
        Self::Parser(value)
    }
}

impl From<ASTError> for CalcError {
    fn from(value: ASTError) -> Self {
        Self::AST(value)
    }
}

/// Evaluates one `operand operator operand` line.
pub fn evaluate(line: &str) -> Result<EvaluationResult, CalcError> {
    evaluate_expression(&produce_ast(line)?)
}

pub fn evaluate_expression(expression: &Expression) -> Result<EvaluationResult, CalcError> {
    let left = resolve_operand(&expression.left)?;
    let right = resolve_operand(&expression.right)?;

    if !OPERAND_RANGE.contains(&left) || !OPERAND_RANGE.contains(&right) {
        return Err(CalcError::OperandOutOfRange(left, right));
    }

    let roman = !expression.left.is_arabic();
    if roman == expression.right.is_arabic() {
        return Err(CalcError::MixedNumeralSystems);
    }
    debug!(%expression, left, right, roman, "resolved operands");

    let operator = BinaryOperator::from_symbol(&expression.operator.value)
        .ok_or_else(|| CalcError::UnknownOperator(expression.operator.value.clone()))?;
    let result = operator.handle(left, right)?;
    debug!(operator = %operator.to_symbol(), result, "computed");

    if !roman {
        return Ok(EvaluationResult::Arabic(result));
    }

    let value = EvaluationResult::roman_or_arabic(result);
    if let EvaluationResult::Arabic(_) = value {
        debug!(result, "no roman representation, falling back to arabic");
    }
    Ok(value)
}

fn resolve_operand(token: &Token) -> Result<i64, CalcError> {
    let invalid = || CalcError::InvalidOperand(token.value.clone());

    match token.token_type {
        TokenType::Arabic => token.value.parse::<i64>().map_err(|_| invalid()),
        TokenType::Roman => roman_to_arabic(&token.value).map_err(|err| {
            debug!(token = %token.value, %err, "operand is not a roman numeral");
            invalid()
        }),
        TokenType::Symbol => {
            debug!(token = %token.value, "operand is not a number");
            Err(invalid())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    use crate::numerals::arabic_to_roman;

    fn roman(x: &str) -> EvaluationResult {
        EvaluationResult::Roman(x.to_string())
    }

    #[test]
    fn test_evaluate_arabic() {
        assert_eq!(evaluate("3 + 4"), Ok(EvaluationResult::Arabic(7)));
        assert_eq!(evaluate("10 * 10"), Ok(EvaluationResult::Arabic(100)));
        assert_eq!(evaluate("2 - 9"), Ok(EvaluationResult::Arabic(-7)));
        assert_eq!(evaluate("9 / 2"), Ok(EvaluationResult::Arabic(4)));
        assert_eq!(evaluate("1 - 1"), Ok(EvaluationResult::Arabic(0)));
    }

    #[test]
    fn test_evaluate_roman() {
        assert_eq!(evaluate("III + IV"), Ok(roman("VII")));
        assert_eq!(evaluate("X * X"), Ok(roman("C")));
        assert_eq!(evaluate("IX / II"), Ok(roman("IV")));
        assert_eq!(evaluate("VI * IX"), Ok(roman("LIV")));
    }

    #[test]
    fn test_evaluate_roman_without_representation() {
        assert_eq!(evaluate("I - I"), Ok(EvaluationResult::Arabic(0)));
        assert_eq!(evaluate("II - IX"), Ok(EvaluationResult::Arabic(-7)));
        assert_eq!(evaluate("I / X"), Ok(EvaluationResult::Arabic(0)));
    }

    #[test]
    fn test_evaluate_malformed() {
        for line in ["", "3", "3 +", "3+4", "1 + 2 + 3"] {
            assert!(matches!(
                evaluate(line),
                Err(CalcError::Parser(ParserError::MalformedExpression(_)))
            ));
        }
    }

    #[test]
    fn test_evaluate_invalid_operand() {
        assert_eq!(
            evaluate("3 + four"),
            Err(CalcError::InvalidOperand(String::from("four")))
        );
        assert_eq!(
            evaluate("iv + 1"),
            Err(CalcError::InvalidOperand(String::from("iv")))
        );
        assert_eq!(
            evaluate("L - I"),
            Err(CalcError::InvalidOperand(String::from("L")))
        );
    }

    #[test]
    fn test_evaluate_out_of_range() {
        assert_eq!(evaluate("11 + 1"), Err(CalcError::OperandOutOfRange(11, 1)));
        assert_eq!(evaluate("1 + 0"), Err(CalcError::OperandOutOfRange(1, 0)));
        assert_eq!(evaluate("-1 * 2"), Err(CalcError::OperandOutOfRange(-1, 2)));
        assert_eq!(evaluate("XI + I"), Err(CalcError::OperandOutOfRange(11, 1)));
    }

    #[test]
    fn test_evaluate_mixed_numerals() {
        assert_eq!(evaluate("3 + IV"), Err(CalcError::MixedNumeralSystems));
        assert_eq!(evaluate("IV + 3"), Err(CalcError::MixedNumeralSystems));
    }

    #[test]
    fn test_evaluate_unknown_operator() {
        assert_eq!(
            evaluate("3 $ 4"),
            Err(CalcError::UnknownOperator(String::from("$")))
        );
        assert_eq!(
            evaluate("II ^ II"),
            Err(CalcError::UnknownOperator(String::from("^")))
        );
    }

    #[test]
    fn test_evaluate_error_order() {
        // Operands are checked before the operator.
        assert_eq!(
            evaluate("3 $ x"),
            Err(CalcError::InvalidOperand(String::from("x")))
        );
        assert_eq!(evaluate("3 $ 40"), Err(CalcError::OperandOutOfRange(3, 40)));
        assert_eq!(evaluate("3 $ V"), Err(CalcError::MixedNumeralSystems));
        assert_eq!(evaluate("30 + V"), Err(CalcError::OperandOutOfRange(30, 5)));
    }

    #[test]
    fn test_division_by_zero_message() {
        assert_eq!(
            CalcError::from(ASTError::DivisionByZero).to_string(),
            "division by zero is not allowed"
        );
    }

    #[test]
    fn test_resolve_operand_by_token_type() {
        assert_eq!(resolve_operand(&Token::new("10")), Ok(10));
        assert_eq!(resolve_operand(&Token::new("IX")), Ok(9));
        assert_eq!(
            resolve_operand(&Token::new("IXL")),
            Err(CalcError::InvalidOperand(String::from("IXL")))
        );
    }

    #[test]
    fn test_evaluate_signed_arabic_operands() {
        assert_eq!(evaluate("+5 - 007"), Ok(EvaluationResult::Arabic(-2)));
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        for line in ["VIII - III", "4 / 3", "2 % 2"] {
            assert_eq!(evaluate(line), evaluate(line));
        }
    }

    #[test]
    fn test_numeral_systems_agree() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let left: i64 = rng.random_range(1..=10);
            let right: i64 = rng.random_range(1..=10);
            let operator = ["+", "-", "*", "/"][rng.random_range(0..4)];

            let Ok(EvaluationResult::Arabic(expected)) =
                evaluate(&format!("{left} {operator} {right}"))
            else {
                panic!("Expected an arabic result for {left} {operator} {right}");
            };

            let line = format!(
                "{} {operator} {}",
                arabic_to_roman(left).unwrap(),
                arabic_to_roman(right).unwrap()
            );
            match evaluate(&line).unwrap() {
                EvaluationResult::Roman(x) => {
                    assert_eq!(x, arabic_to_roman(expected).unwrap(), "{line}")
                }
                EvaluationResult::Arabic(x) => {
                    assert!(x <= 0, "{line}");
                    assert_eq!(x, expected, "{line}");
                }
            }
        }
    }
}
