use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralErr {
    #[error("invalid roman numeral symbol '{0}'")]
    InvalidSymbol(char),
    #[error("{0} has no roman numeral representation")]
    NoRepresentation(i64),
}

/// Encoding table, largest denomination first.
pub const NUMERALS: [(i64, &str); 7] = [
    (100, "C"),
    (50, "L"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomanDigit {
    I,
    V,
    X,
}

impl RomanDigit {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'I' => Some(Self::I),
            'V' => Some(Self::V),
            'X' => Some(Self::X),
            _ => None,
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            Self::I => 1,
            Self::V => 5,
            Self::X => 10,
        }
    }
}

/// Decodes a roman numeral using subtractive notation: a digit smaller than
/// its successor is subtracted, everything else is added.
///
/// The empty string decodes to `0`.
pub fn roman_to_arabic(roman: &str) -> Result<i64, NumeralErr> {
    let digits = roman
        .chars()
        .map(|c| RomanDigit::from_symbol(c).ok_or(NumeralErr::InvalidSymbol(c)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut result = 0;
    for (i, digit) in digits.iter().enumerate() {
        match digits.get(i + 1) {
            Some(next) if digit.value() < next.value() => result -= digit.value(),
            _ => result += digit.value(),
        }
    }

    Ok(result)
}

/// Greedy encoding over [`NUMERALS`]. Only positive values have a
/// representation.
pub fn arabic_to_roman(arabic: i64) -> Result<String, NumeralErr> {
    if arabic <= 0 {
        return Err(NumeralErr::NoRepresentation(arabic));
    }

    let mut remaining = arabic;
    let mut result = String::new();

    for (value, symbol) in NUMERALS {
        while remaining >= value {
            result.push_str(symbol);
            remaining -= value;
        }
    }

    Ok(result)
}
