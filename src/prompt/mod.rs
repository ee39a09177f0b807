//! Interactive collection of problem metadata.
//!
//! Fields are read in a fixed order (Year, Round, Folder, Name, URL). A value
//! that fails its predicate prints `Bad input {field}: {value}` and the same
//! field is asked again; earlier fields are never revisited. End of input or
//! an interrupt at any prompt ends the whole sequence with
//! [`Prompted::Ended`].

mod interrupt;
mod source;

#[cfg(test)]
mod tests;

pub use interrupt::Interrupt;
pub use source::{Line, LineSource, ReaderLines, StdinLines};

use crate::error::{CfnewError, Result};
use crate::problem::{self, ProblemDescriptor, ProblemField};
use std::io::Write;
use tracing::debug;

/// Why prompting stopped before a value was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    EndOfInput,
    Interrupted,
}

/// Result of a prompt: an accepted value, or the end of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Value(T),
    Ended(EndReason),
}

/// Unwraps a `Result<Prompted<T>>`, returning early from the enclosing
/// function when the session ended.
macro_rules! accepted {
    ($read:expr) => {
        match $read? {
            Prompted::Value(value) => value,
            Prompted::Ended(reason) => return Ok(Prompted::Ended(reason)),
        }
    };
}

/// Prompts on `out` and reads answers from a [`LineSource`].
pub struct Prompter<S, W> {
    source: S,
    out: W,
    interrupt: Interrupt,
    current_year: String,
}

impl<S: LineSource, W: Write> Prompter<S, W> {
    pub fn new(source: S, out: W, interrupt: Interrupt) -> Self {
        Self {
            source,
            out,
            interrupt,
            current_year: problem::current_year(),
        }
    }

    /// Override the year substituted for blank year input.
    pub fn with_current_year(mut self, year: impl Into<String>) -> Self {
        self.current_year = year.into();
        self
    }

    /// The output sink prompts are written to.
    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the prompter, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run all five prompts and assemble the descriptor.
    pub fn collect_problem(&mut self) -> Result<Prompted<ProblemDescriptor>> {
        let year = accepted!(self.read_year());
        let round = accepted!(self.read_round());
        let slug = accepted!(self.read_folder());
        let name = accepted!(self.read_name());
        let link = accepted!(self.read_link());

        let problem = ProblemDescriptor::new(&year, &round, &slug, &name, &link)
            .map_err(|e| CfnewError::UserError(e.to_string()))?;
        debug!(?problem, "collected problem metadata");

        Ok(Prompted::Value(problem))
    }

    /// Year: `20xx` or `tmp`; blank means the current year.
    pub fn read_year(&mut self) -> Result<Prompted<String>> {
        self.read_field(ProblemField::Year)
    }

    /// Round: 1 to 10 letters or digits, returned upper-cased.
    pub fn read_round(&mut self) -> Result<Prompted<String>> {
        let round = accepted!(self.read_field(ProblemField::Round));
        Ok(Prompted::Value(problem::validation::normalize_round(&round)))
    }

    /// Folder slug: letters, digits, `-` and `+`.
    pub fn read_folder(&mut self) -> Result<Prompted<String>> {
        self.read_field(ProblemField::Folder)
    }

    /// Problem name from the allow-listed character set.
    pub fn read_name(&mut self) -> Result<Prompted<String>> {
        self.read_field(ProblemField::Name)
    }

    /// URL: anything, including nothing.
    pub fn read_link(&mut self) -> Result<Prompted<String>> {
        self.read_field(ProblemField::Url)
    }

    fn read_field(&mut self, field: ProblemField) -> Result<Prompted<String>> {
        loop {
            write!(self.out, "{}", field.prompt()).map_err(output_error)?;
            self.out.flush().map_err(output_error)?;

            let raw = match self.next_line()? {
                Prompted::Value(raw) => raw,
                Prompted::Ended(reason) => {
                    // Leave the terminal on a fresh line.
                    writeln!(self.out).map_err(output_error)?;
                    debug!(?reason, %field, "prompting ended");
                    return Ok(Prompted::Ended(reason));
                }
            };

            let value = raw.trim();
            if field == ProblemField::Year && value.is_empty() {
                return Ok(Prompted::Value(self.current_year.clone()));
            }
            if field.accepts(value) {
                return Ok(Prompted::Value(value.to_string()));
            }

            debug!(%field, value, "rejected input");
            writeln!(self.out, "Bad input {}: {}", field, value).map_err(output_error)?;
        }
    }

    fn next_line(&mut self) -> Result<Prompted<String>> {
        if self.interrupt.is_raised() {
            return Ok(Prompted::Ended(EndReason::Interrupted));
        }
        match self.source.next_line()? {
            Line::Text(text) => Ok(Prompted::Value(text)),
            Line::EndOfInput => Ok(Prompted::Ended(EndReason::EndOfInput)),
            Line::Interrupted => Ok(Prompted::Ended(EndReason::Interrupted)),
        }
    }
}

fn output_error(e: std::io::Error) -> CfnewError {
    CfnewError::InputError(format!("failed to write prompt: {}", e))
}
