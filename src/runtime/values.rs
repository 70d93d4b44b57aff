use std::fmt;

use crate::numerals::arabic_to_roman;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationResult {
    Arabic(i64),
    Roman(String),
}

impl EvaluationResult {
    /// Renders `value` as a roman numeral, falling back to the integer when it
    /// has no roman form.
    pub fn roman_or_arabic(value: i64) -> Self {
        match arabic_to_roman(value) {
            Ok(roman) => Self::Roman(roman),
            Err(_) => Self::Arabic(value),
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arabic(x) => write!(f, "{x}"),
            Self::Roman(x) => write!(f, "{x}"),
        }
    }
}
