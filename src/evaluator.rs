use crate::error::DiceError;
use crate::roll::{roll, DieRoller};
use crate::token::Token;
use std::convert::TryFrom;

/// Evaluates postfix token sequences with a single value stack.
pub struct Evaluator<R: DieRoller> {
    roller: R,
    max_dice: Option<u64>,
}

impl<R: DieRoller> Evaluator<R> {
    pub fn new(roller: R) -> Evaluator<R> {
        Evaluator {
            roller,
            max_dice: None,
        }
    }

    /// Refuse any single roll of more than `max_dice` dice. Without this
    /// there is no limit.
    pub fn with_max_dice(mut self, max_dice: u64) -> Evaluator<R> {
        self.max_dice = Some(max_dice);
        self
    }

    /// Consume a postfix sequence down to a single number. Any error item
    /// in the sequence ends evaluation with that error.
    pub fn evaluate<I>(&mut self, tokens: I) -> Result<i64, DiceError>
    where
        I: IntoIterator<Item = Result<Token, DiceError>>,
    {
        let mut stack: Vec<i64> = vec![];

        for token in tokens {
            let token = token?;
            match token {
                Token::Number(value) => stack.push(value),
                Token::Add => {
                    let (left, right) = pop_operands(&mut stack, token)?;
                    let sum = left.checked_add(right).ok_or(DiceError::Overflow)?;
                    stack.push(sum);
                }
                Token::Dice => {
                    let (multiplier, faces) = pop_operands(&mut stack, token)?;
                    if let Some(max_dice) = self.max_dice {
                        let too_many = u64::try_from(multiplier).map_or(false, |n| n > max_dice);
                        if too_many {
                            return Err(DiceError::ExpressionTooLarge(multiplier));
                        }
                    }
                    stack.push(roll(&mut self.roller, multiplier, faces)?);
                }
            }
        }

        match stack.as_slice() {
            [result] => Ok(*result),
            _ => Err(DiceError::EvaluateArityFault(stack.len())),
        }
    }
}

/// Pop (left, right). The right operand was pushed last, so it comes off
/// first.
fn pop_operands(stack: &mut Vec<i64>, op: Token) -> Result<(i64, i64), DiceError> {
    let right = stack.pop().ok_or(DiceError::EvaluateUnderflow(op))?;
    let left = stack.pop().ok_or(DiceError::EvaluateUnderflow(op))?;
    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::tests::SequentialDieRoller;
    use crate::roll::RngDieRoller;
    use Token::*;

    fn eval<R: DieRoller>(
        evaluator: &mut Evaluator<R>,
        tokens: Vec<Token>,
    ) -> Result<i64, DiceError> {
        evaluator.evaluate(tokens.into_iter().map(Ok))
    }

    #[test]
    fn adds_numbers_test() {
        let mut evaluator = Evaluator::new(RngDieRoller::seeded(1));
        assert_eq!(Ok(8), eval(&mut evaluator, vec![Number(5), Number(3), Add]));
    }

    #[test]
    fn single_number_is_result_test() {
        let mut evaluator = Evaluator::new(RngDieRoller::seeded(1));
        assert_eq!(Ok(42), eval(&mut evaluator, vec![Number(42)]));
    }

    #[test]
    fn dice_uses_left_as_count_and_right_as_faces_test() {
        struct RecordingRoller(Vec<i64>);
        impl DieRoller for RecordingRoller {
            fn roll_die(&mut self, faces: i64) -> i64 {
                self.0.push(faces);
                1
            }
        }

        let mut evaluator = Evaluator::new(RecordingRoller(vec![]));
        assert_eq!(Ok(3), eval(&mut evaluator, vec![Number(3), Number(8), Dice]));
        assert_eq!(vec![8, 8, 8], evaluator.roller.0);
    }

    #[test]
    fn dice_result_feeds_addition_test() {
        // 2 3 4 . +  with rolls 4, 1, 2
        let mut evaluator = Evaluator::new(SequentialDieRoller::new(vec![4, 1, 2]));
        let result = eval(
            &mut evaluator,
            vec![Number(2), Number(3), Number(4), Dice, Add],
        );
        assert_eq!(Ok(9), result);
    }

    #[test]
    fn two_numbers_without_operator_is_arity_fault_test() {
        let mut evaluator = Evaluator::new(RngDieRoller::seeded(1));
        assert_eq!(
            Err(DiceError::EvaluateArityFault(2)),
            eval(&mut evaluator, vec![Number(1), Number(2)])
        );
    }

    #[test]
    fn empty_sequence_is_arity_fault_test() {
        let mut evaluator = Evaluator::new(RngDieRoller::seeded(1));
        assert_eq!(
            Err(DiceError::EvaluateArityFault(0)),
            eval(&mut evaluator, vec![])
        );
    }

    #[test]
    fn bare_operator_underflows_test() {
        let mut evaluator = Evaluator::new(RngDieRoller::seeded(1));
        assert_eq!(
            Err(DiceError::EvaluateUnderflow(Add)),
            eval(&mut evaluator, vec![Add])
        );
        assert_eq!(
            Err(DiceError::EvaluateUnderflow(Dice)),
            eval(&mut evaluator, vec![Number(6), Dice])
        );
    }

    #[test]
    fn degenerate_dice_propagates_test() {
        let mut evaluator = Evaluator::new(RngDieRoller::seeded(1));
        assert_eq!(
            Err(DiceError::DegenerateRollFault(0)),
            eval(&mut evaluator, vec![Number(2), Number(0), Dice])
        );
    }

    #[test]
    fn rejects_large_expression_test() {
        let mut evaluator = Evaluator::new(RngDieRoller::seeded(1)).with_max_dice(100);
        assert_eq!(
            Err(DiceError::ExpressionTooLarge(101)),
            eval(&mut evaluator, vec![Number(101), Number(6), Dice])
        );
        assert_eq!(Ok(100), eval(&mut evaluator, vec![Number(100), Number(1), Dice]));
    }

    #[test]
    fn no_dice_limit_by_default_test() {
        let mut evaluator = Evaluator::new(RngDieRoller::seeded(1));
        assert_eq!(
            Ok(10_001),
            eval(&mut evaluator, vec![Number(10_001), Number(1), Dice])
        );
    }

    #[test]
    fn addition_overflow_test() {
        let mut evaluator = Evaluator::new(RngDieRoller::seeded(1));
        assert_eq!(
            Err(DiceError::Overflow),
            eval(&mut evaluator, vec![Number(i64::MAX), Number(1), Add])
        );
    }

    #[test]
    fn error_item_aborts_evaluation_test() {
        let mut evaluator = Evaluator::new(RngDieRoller::seeded(1));
        let tokens = vec![Ok(Number(1)), Err(DiceError::TokenizeFault("?".to_owned()))];
        assert_eq!(
            Err(DiceError::TokenizeFault("?".to_owned())),
            evaluator.evaluate(tokens)
        );
    }
}
