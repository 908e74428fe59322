use crate::config::ConfigError;
use crate::token::Token;
use thiserror::Error;

/// Faults raised by the expression pipeline. All of them are fatal to
/// the evaluation that raised them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    /// A pattern match resolved to no known token category.
    #[error("tokenizer fail: unrecognized match {0:?}")]
    TokenizeFault(String),

    #[error("number out of range: {0}")]
    NumberOutOfRange(String),

    /// A token that is not an operator was offered to the operator stack.
    #[error("infix to postfix error: {0} is not an operator")]
    ConvertFault(Token),

    #[error("evaluation error: not enough operands for '{0}'")]
    EvaluateUnderflow(Token),

    #[error("evaluation error: unexpected number of results ({0})")]
    EvaluateArityFault(usize),

    #[error("cannot roll dice with {0} faces")]
    DegenerateRollFault(i64),

    #[error("invalid amount of dice: {0}")]
    InvalidAmount(i64),

    #[error("dice pool expression too large: {0} dice")]
    ExpressionTooLarge(i64),

    #[error("integer overflow during evaluation")]
    Overflow,
}

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("configuration error: {0}")]
    ConfigurationError(#[from] ConfigError),

    #[error("could not compile token pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("{0}")]
    DiceError(#[from] DiceError),

    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
}
