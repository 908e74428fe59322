use crate::config::Config;
use crate::error::{CalcError, DiceError};
use crate::evaluator::Evaluator;
use crate::postfix::Postfix;
use crate::roll::{DieRoller, RngDieRoller};
use crate::tokenizer::Tokenizer;
use log::debug;
use rand::rngs::StdRng;

/// Runs one line of dice notation through the whole pipeline:
/// tokenize, convert to postfix, evaluate.
pub struct Calculator<R: DieRoller> {
    tokenizer: Tokenizer,
    evaluator: Evaluator<R>,
}

impl<R: DieRoller> Calculator<R> {
    pub fn new(roller: R) -> Result<Calculator<R>, CalcError> {
        Ok(Calculator {
            tokenizer: Tokenizer::new()?,
            evaluator: Evaluator::new(roller),
        })
    }

    pub fn with_max_dice(self, max_dice: u64) -> Calculator<R> {
        Calculator {
            tokenizer: self.tokenizer,
            evaluator: self.evaluator.with_max_dice(max_dice),
        }
    }

    pub fn calculate(&mut self, input: &str) -> Result<i64, DiceError> {
        let tokens = self.tokenizer.tokenize(input);
        let result = self.evaluator.evaluate(Postfix::new(tokens))?;
        debug!("{:?} => {}", input, result);
        Ok(result)
    }
}

impl Calculator<RngDieRoller<StdRng>> {
    /// Build a calculator with the RNG and dice limit from the config.
    pub fn from_config(cfg: &Config) -> Result<Calculator<RngDieRoller<StdRng>>, CalcError> {
        let roller = match cfg.seed() {
            Some(seed) => RngDieRoller::seeded(seed),
            None => RngDieRoller::from_entropy(),
        };

        let calculator = Calculator::new(roller)?;
        match cfg.max_dice() {
            Some(max_dice) => Ok(calculator.with_max_dice(max_dice)),
            None => Ok(calculator),
        }
    }
}
