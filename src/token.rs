use crate::error::DiceError;
use std::convert::TryFrom;
use std::fmt;

/// A single unit of a dice expression. The set of variants is closed:
/// everything the tokenizer produces is one of these three.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A literal, non-negative operand.
    Number(i64),

    /// Addition, `+`.
    Add,

    /// Dice roll, `.`. Left operand is the number of dice, right
    /// operand is the number of faces.
    Dice,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Add => write!(f, "+"),
            Token::Dice => write!(f, "."),
        }
    }
}

/// The tokens that can wait on the operator stack during infix to
/// postfix conversion.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Dice,
}

impl Operator {
    /// Binding strength. Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add => 1,
            Operator::Dice => 2,
        }
    }
}

impl TryFrom<Token> for Operator {
    type Error = DiceError;

    fn try_from(token: Token) -> Result<Operator, DiceError> {
        match token {
            Token::Add => Ok(Operator::Add),
            Token::Dice => Ok(Operator::Dice),
            Token::Number(_) => Err(DiceError::ConvertFault(token)),
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Token {
        match op {
            Operator::Add => Token::Add,
            Operator::Dice => Token::Dice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_outranks_add_test() {
        assert!(Operator::Dice.precedence() > Operator::Add.precedence());
    }

    #[test]
    fn number_is_not_an_operator_test() {
        let result = Operator::try_from(Token::Number(3));
        assert_eq!(Err(DiceError::ConvertFault(Token::Number(3))), result);
    }

    #[test]
    fn operators_convert_both_ways_test() {
        assert_eq!(Ok(Operator::Add), Operator::try_from(Token::Add));
        assert_eq!(Ok(Operator::Dice), Operator::try_from(Token::Dice));
        assert_eq!(Token::Dice, Token::from(Operator::Dice));
    }

    #[test]
    fn display_uses_notation_test() {
        assert_eq!("42", Token::Number(42).to_string());
        assert_eq!("+", Token::Add.to_string());
        assert_eq!(".", Token::Dice.to_string());
    }
}
