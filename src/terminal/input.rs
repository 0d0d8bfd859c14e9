//! Answer input using rustyline
//!
//! Accepts an option number (1-based), an option token, or an option label.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::quiz::Question;

/// Resolve raw user input to an option token of `question`
pub fn parse_choice(input: &str, question: &Question) -> Option<&'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(n) = trimmed.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| question.options.get(i))
            .map(|o| o.value);
    }

    question
        .options
        .iter()
        .find(|o| o.value.eq_ignore_ascii_case(trimmed) || o.label.to_lowercase() == trimmed.to_lowercase())
        .map(|o| o.value)
}

pub struct InputHandler {
    editor: DefaultEditor,
    prompt: String,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            prompt: "> ".to_string(),
        })
    }

    /// Read a line of input from the user
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input
    /// - Ok(None) for EOF (Ctrl-D)
    /// - Err on interrupt (Ctrl-C) or other errors
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(ReadlineError::Interrupted) => Err(anyhow::anyhow!("Interrupted")),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    /// Read until the user picks a valid option or closes input
    pub fn read_choice<F>(&mut self, question: &Question, mut on_invalid: F) -> Result<Option<&'static str>>
    where
        F: FnMut(&str),
    {
        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            match parse_choice(&line, question) {
                Some(token) => return Ok(Some(token)),
                None => on_invalid(&line),
            }
        }
    }

    /// Ask a yes/no question; anything but an explicit yes is "no"
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let previous = std::mem::replace(&mut self.prompt, prompt.to_string());
        let answer = self.read_line();
        self.prompt = previous;

        Ok(matches!(
            answer?.as_deref().map(str::to_lowercase).as_deref(),
            Some("s") | Some("sim") | Some("y") | Some("yes")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::questions;

    #[test]
    fn test_parse_by_number() {
        let q = &questions()[0];
        assert_eq!(parse_choice("1", q), Some("perder_peso"));
        assert_eq!(parse_choice(" 4 ", q), Some("melhorar_saude"));
        assert_eq!(parse_choice("0", q), None);
        assert_eq!(parse_choice("5", q), None);
    }

    #[test]
    fn test_parse_by_token_and_label() {
        let q = &questions()[4];
        assert_eq!(parse_choice("tempo", q), Some("tempo"));
        assert_eq!(parse_choice("TEMPO", q), Some("tempo"));
        assert_eq!(parse_choice("falta de motivação", q), Some("motivacao"));
    }

    #[test]
    fn test_parse_rejects_other_questions_tokens() {
        let q = &questions()[1];
        assert_eq!(parse_choice("perder_peso", q), None);
        assert_eq!(parse_choice("", q), None);
    }
}
