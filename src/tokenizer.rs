use crate::error::DiceError;
use crate::token::Token;
use regex::{CaptureMatches, Captures, Regex};

/// Alternatives are tried in this order at each scan position.
const TOKEN_PATTERN: &str = r"(?P<number>[0-9]+)|(?P<add>\+)|(?P<dice>\.)";

/// Scans raw text into tokens. Anything between matches (whitespace,
/// letters, stray punctuation) is skipped without complaint.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Tokenizer, regex::Error> {
        let pattern = Regex::new(TOKEN_PATTERN)?;
        Ok(Tokenizer { pattern })
    }

    /// Lazily tokenize the input. Nothing is scanned until the returned
    /// iterator is pulled.
    pub fn tokenize<'r, 't>(&'r self, input: &'t str) -> Tokens<'r, 't> {
        Tokens {
            captures: self.pattern.captures_iter(input),
        }
    }
}

pub struct Tokens<'r, 't> {
    captures: CaptureMatches<'r, 't>,
}

impl<'r, 't> Iterator for Tokens<'r, 't> {
    type Item = Result<Token, DiceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.captures
            .next()
            .map(|captures| token_from_captures(&captures))
    }
}

fn token_from_captures(captures: &Captures) -> Result<Token, DiceError> {
    if let Some(number) = captures.name("number") {
        let digits = number.as_str();
        digits
            .parse::<i64>()
            .map(Token::Number)
            .map_err(|_| DiceError::NumberOutOfRange(digits.to_owned()))
    } else if captures.name("add").is_some() {
        Ok(Token::Add)
    } else if captures.name("dice").is_some() {
        Ok(Token::Dice)
    } else {
        let matched = captures.get(0).map(|m| m.as_str()).unwrap_or_default();
        Err(DiceError::TokenizeFault(matched.to_owned()))
    }
}
