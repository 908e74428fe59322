use crate::calculator::Calculator;
use crate::config::Config;
use crate::error::CalcError;
use crate::roll::DieRoller;
use log::warn;
use std::io::{BufRead, Write};

/// Settings for the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplSettings {
    pub prompt: String,
    pub continue_on_error: bool,
}

impl From<&Config> for ReplSettings {
    fn from(cfg: &Config) -> ReplSettings {
        ReplSettings {
            prompt: cfg.prompt().to_owned(),
            continue_on_error: cfg.continue_on_error(),
        }
    }
}

impl Default for ReplSettings {
    fn default() -> ReplSettings {
        ReplSettings::from(&Config::default())
    }
}

/// Prompt, read a line, print its value, until the input runs out. A
/// bad expression ends the loop with its error unless the settings say
/// to keep going.
pub fn run<I, O, R>(
    input: I,
    mut output: O,
    calculator: &mut Calculator<R>,
    settings: &ReplSettings,
) -> Result<(), CalcError>
where
    I: BufRead,
    O: Write,
    R: DieRoller,
{
    let mut lines = input.lines();

    loop {
        write!(output, "{}", settings.prompt)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match calculator.calculate(&line) {
            Ok(result) => writeln!(output, "{}", result)?,
            Err(e) if settings.continue_on_error => {
                warn!("Could not evaluate {:?}: {}", line, e);
                writeln!(output, "error: {}", e)?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
