use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ASTError {
    #[error("division by zero is not allowed")]
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Sub,
    Add,
    Mul,
    Div,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "/" => Some(Self::Div),
            "*" => Some(Self::Mul),
            _ => None,
        }
    }

    pub fn to_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Div => '/',
            Self::Mul => '*',
        }
    }

    /// Division truncates toward zero.
    pub fn handle(&self, left: i64, right: i64) -> Result<i64, ASTError> {
        Ok(match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0 {
                    return Err(ASTError::DivisionByZero);
                }
                left / right
            }
        })
    }
}
