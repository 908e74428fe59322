pub mod calculator;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod postfix;
pub mod repl;
pub mod roll;
pub mod token;
pub mod tokenizer;

pub use calculator::Calculator;
pub use error::{CalcError, DiceError};
pub use token::{Operator, Token};
