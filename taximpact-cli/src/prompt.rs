//! Question-and-answer loop for collecting amounts.
//!
//! Each question is asked until the answer parses. Bad answers are reported
//! to the user and asked again; they never leave this module.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::utils::{ParseAmountError, parse_amount};

/// Shown after every rejected answer.
pub const RETRY_HINT: &str = "Please enter a valid number (e.g. 80000 or 80,000)";

/// Errors that end a prompt without an answer.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input reached end-of-file while a question was waiting.
    #[error("input closed while waiting for '{question}'")]
    InputClosed { question: &'static str },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// One amount the user is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub title: &'static str,
    /// May span several lines; the first is prefixed with an arrow.
    pub explanation: &'static str,
    /// Used when the answer is left empty.
    pub default: Option<Decimal>,
}

/// Asks [`Question`]s on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(
        input: R,
        output: W,
    ) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Writer the questions go to, for output between questions.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Asks `question` until a valid amount is entered.
    ///
    /// # Errors
    ///
    /// * [`PromptError::InputClosed`] if input ends before a valid answer.
    /// * [`PromptError::Io`] if reading or writing the terminal fails.
    pub fn ask(
        &mut self,
        question: &Question,
    ) -> Result<Decimal, PromptError> {
        writeln!(self.output, "\n{}", question.title)?;
        writeln!(self.output, "→ {}", question.explanation)?;

        loop {
            match question.default {
                Some(default) => write!(self.output, "Enter amount (default {default}): ")?,
                None => write!(self.output, "Enter amount: ")?,
            }
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(PromptError::InputClosed {
                    question: question.title,
                });
            }

            match (parse_amount(&self.line), question.default) {
                (Ok(amount), _) => {
                    debug!(question = question.title, %amount, "answer accepted");
                    return Ok(amount);
                }
                (Err(ParseAmountError::Empty), Some(default)) => {
                    debug!(question = question.title, %default, "default accepted");
                    return Ok(default);
                }
                (Err(_), _) => writeln!(self.output, "{RETRY_HINT}")?,
            }
        }
    }

    /// Releases the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const INCOME: Question = Question {
        title: "Income",
        explanation: "Total employment income.",
        default: None,
    };

    const RATE: Question = Question {
        title: "Rate",
        explanation: "Blended rate.",
        default: Some(Decimal::from_parts(30, 0, 0, false, 2)),
    };

    fn ask(
        question: &Question,
        answers: &str,
    ) -> (Result<Decimal, PromptError>, String) {
        let mut prompter = Prompter::new(Cursor::new(answers.to_string()), Vec::new());
        let result = prompter.ask(question);
        let (_, output) = prompter.into_inner();

        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn ask_returns_parsed_answer() {
        let (result, output) = ask(&INCOME, "80,000\n");

        assert_eq!(result.unwrap(), dec!(80000));
        assert_eq!(
            output,
            "\nIncome\n→ Total employment income.\nEnter amount: "
        );
    }

    #[test]
    fn ask_shows_default_in_prompt() {
        let (result, output) = ask(&RATE, "0.25\n");

        assert_eq!(result.unwrap(), dec!(0.25));
        assert!(output.ends_with("Enter amount (default 0.30): "));
    }

    #[test]
    fn ask_uses_default_for_empty_answer() {
        let (result, _) = ask(&RATE, "\n");

        assert_eq!(result.unwrap(), dec!(0.30));
    }

    #[test]
    fn ask_uses_default_for_whitespace_answer() {
        let (result, _) = ask(&RATE, "   \n");

        assert_eq!(result.unwrap(), dec!(0.30));
    }

    #[test]
    fn ask_retries_until_valid() {
        let (result, output) = ask(&INCOME, "lots\n\n80000\n");

        assert_eq!(result.unwrap(), dec!(80000));
        assert_eq!(output.matches(RETRY_HINT).count(), 2);
        assert_eq!(output.matches("Enter amount: ").count(), 3);
    }

    #[test]
    fn ask_accepts_answer_without_trailing_newline() {
        let (result, _) = ask(&INCOME, "15000");

        assert_eq!(result.unwrap(), dec!(15000));
    }

    #[test]
    fn ask_reports_closed_input() {
        let (result, _) = ask(&INCOME, "oops\n");

        match result {
            Err(PromptError::InputClosed { question }) => assert_eq!(question, "Income"),
            other => panic!("expected InputClosed, got {:?}", other),
        }
    }

    #[test]
    fn ask_handles_crlf_line_endings() {
        let (result, _) = ask(&INCOME, "9,500\r\n");

        assert_eq!(result.unwrap(), dec!(9500));
    }
}
