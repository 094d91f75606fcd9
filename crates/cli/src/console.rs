use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

/// Line-oriented numeric prompting over any reader/writer pair.
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for results.
    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Returns `given` if present, otherwise prompts for a number.
    pub(crate) fn number_or_prompt(
        &mut self,
        given: Option<f64>,
        label: &str,
        default: Option<f64>,
    ) -> Result<f64> {
        match given {
            Some(value) => Ok(value),
            None => self.number(label, default),
        }
    }

    /// Prompts until the user enters a finite number.
    ///
    /// An empty line selects `default` when there is one. End of input is an error.
    pub(crate) fn number(&mut self, label: &str, default: Option<f64>) -> Result<f64> {
        loop {
            match default {
                Some(default) => write!(self.output, "{label} (default: {default}): ")?,
                None => write!(self.output, "{label}: ")?,
            }
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read from input")?;
            if read == 0 {
                writeln!(self.output)?;
                bail!("input cancelled while reading {label}");
            }

            let trimmed = line.trim();
            if let (true, Some(default)) = (trimmed.is_empty(), default) {
                return Ok(default);
            }

            match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => {
                    tracing::debug!(input = trimmed, "rejected non-numeric input");
                    writeln!(self.output, "Invalid input. Please enter a valid number.")?;
                }
            }
        }
    }
}
