//! Question/answer loop over any buffered reader and writer.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::input::InputError;

/// Errors that end a prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read or write the terminal")]
    Io(#[from] io::Error),

    #[error("input closed before a valid answer was given")]
    Closed,
}

/// Asks questions on `output` and reads answers from `input`.
///
/// Invalid answers are reported and the question is asked again until a valid
/// answer arrives or the input is exhausted.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream, for printing between questions.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks `question` until `parse` accepts the answer.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Closed`] if the input ends, or an I/O error.
    pub fn ask<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.read_answer(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    log::debug!("rejected {answer:?}: {error:?}");
                    writeln!(self.output, "{error}. Please try again.")?;
                }
            }
        }
    }

    /// Asks a yes/no `question` until the answer is one of `y`, `yes`, `n`,
    /// or `no` (in any case).
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Closed`] if the input ends, or an I/O error.
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        loop {
            let answer = self.read_answer(question)?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please enter 'y' or 'n'.")?,
            }
        }
    }

    fn read_answer(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_owned())
    }
}
