use crate::numerals::RomanDigit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Arabic,
    Roman,
    Symbol,
}

impl TokenType {
    pub fn classify(value: &str) -> Self {
        if is_arabic(value) {
            Self::Arabic
        } else if !value.is_empty() && value.chars().all(|c| RomanDigit::from_symbol(c).is_some()) {
            Self::Roman
        } else {
            Self::Symbol
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub token_type: TokenType,
}

impl Token {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            token_type: TokenType::classify(value),
        }
    }

    pub fn is_arabic(&self) -> bool {
        self.token_type == TokenType::Arabic
    }
}

/// Whether `value` parses as a plain decimal integer.
pub fn is_arabic(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

pub fn tokenize(txt: &str) -> Vec<Token> {
    txt.split_whitespace().map(Token::new).collect()
}
