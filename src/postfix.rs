use crate::error::DiceError;
use crate::token::{Operator, Token};
use log::trace;
use std::convert::TryFrom;

/// Converts an infix token sequence to postfix using the shunting yard
/// algorithm. Only two precedence levels exist, so the operator stack
/// is resolved with a single check: a pending dice roll is emitted
/// before an addition is admitted.
pub struct Postfix<I> {
    tokens: I,
    stack: Vec<Operator>,
    failed: bool,
}

impl<I> Postfix<I>
where
    I: Iterator<Item = Result<Token, DiceError>>,
{
    pub fn new<T>(tokens: T) -> Postfix<I>
    where
        T: IntoIterator<IntoIter = I, Item = Result<Token, DiceError>>,
    {
        Postfix {
            tokens: tokens.into_iter(),
            stack: vec![],
            failed: false,
        }
    }
}

fn emit(token: Token) -> Option<Result<Token, DiceError>> {
    trace!("postfix emit {}", token);
    Some(Ok(token))
}

impl<I> Iterator for Postfix<I>
where
    I: Iterator<Item = Result<Token, DiceError>>,
{
    type Item = Result<Token, DiceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while let Some(item) = self.tokens.next() {
            let token = match item {
                Ok(token) => token,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };

            if let Token::Number(_) = token {
                return emit(token);
            }

            let op = match Operator::try_from(token) {
                Ok(op) => op,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };

            match op {
                // highest precedence, nothing on the stack can outrank it
                Operator::Dice => self.stack.push(op),
                Operator::Add => {
                    let outranked = self
                        .stack
                        .last()
                        .map_or(false, |top| top.precedence() > op.precedence());

                    if outranked {
                        if let Some(top) = self.stack.pop() {
                            self.stack.push(op);
                            return emit(top.into());
                        }
                    }
                    self.stack.push(op);
                }
            }
        }

        let op = self.stack.pop()?;
        emit(op.into())
    }
}
