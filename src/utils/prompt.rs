//! Console prompting
//!
//! Reads free-text answers for the menu and its operations.

use crate::error::{AutomationError, Result};
use std::io::{BufRead, Write};

/// Source of answers to interactive questions
pub trait Prompter {
    /// Show `prompt` and return the answer without its line terminator.
    ///
    /// Returns [`AutomationError::InputClosed`] once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Like [`Prompter::ask`] but the answer is not echoed when possible
    fn ask_secret(&mut self, prompt: &str) -> Result<String> {
        self.ask(prompt)
    }
}

/// Prompter over any reader/writer pair, usually stdin and stdout
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
    hide_secrets: bool,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    /// Create a console prompt. With `hide_secrets`, secrets are read from
    /// the terminal with echo disabled instead of from `reader`.
    pub const fn new(reader: R, writer: W, hide_secrets: bool) -> Self {
        Self {
            reader,
            writer,
            hide_secrets,
        }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompt<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")
            .and_then(|()| self.writer.flush())
            .map_err(|e| AutomationError::input(prompt, e))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| AutomationError::input(prompt, e))?;
        if read == 0 {
            return Err(AutomationError::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String> {
        if !self.hide_secrets {
            return self.ask(prompt);
        }
        self.writer
            .flush()
            .map_err(|e| AutomationError::input(prompt, e))?;
        rpassword::prompt_password(prompt).map_err(|e| AutomationError::input(prompt, e))
    }
}

/// Prompter answering from a fixed script, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    /// Every prompt shown, in order
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompt {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or(AutomationError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_console_prompt_reads_lines() {
        let mut out = Vec::new();
        let mut prompt = ConsolePrompt::new(Cursor::new("web\r\n  nginx \n"), &mut out, false);

        assert_eq!(prompt.ask("Enter run option: ").unwrap(), "web");
        assert_eq!(prompt.ask("Enter image name: ").unwrap(), "  nginx ");
        assert!(prompt.ask("Enter container name: ").unwrap_err().is_input_closed());

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with("Enter run option: Enter image name: "));
    }

    #[test]
    fn test_secret_falls_back_to_reader() {
        let mut prompt = ConsolePrompt::new(Cursor::new("s3cret\n"), Vec::new(), false);
        assert_eq!(prompt.ask_secret("Enter password: ").unwrap(), "s3cret");
    }

    #[test]
    fn test_scripted_prompt_records_questions() {
        let mut prompt = ScriptedPrompt::new(["a"]);
        assert_eq!(prompt.ask("first").unwrap(), "a");
        assert!(prompt.ask("second").is_err());
        assert_eq!(prompt.asked, vec!["first", "second"]);
        assert_eq!(prompt.remaining(), 0);
    }
}
