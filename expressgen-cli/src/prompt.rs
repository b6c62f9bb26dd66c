//! Blocking interactive prompts.
//!
//! The generation logic only sees resolved answers through [`Prompter`];
//! the terminal implementation is one of several (tests replay a script).

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::error::{GenError, Result};

pub trait Prompter {
    fn text(&mut self, message: &str) -> Result<String>;

    /// Pick one of `options`. An empty answer selects `default` when given.
    fn choice(&mut self, message: &str, options: &[&str], default: Option<&str>) -> Result<String>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Line-based prompts over any reader/writer pair.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{} {} ", "?".green().bold(), question.bold()).map_err(GenError::Prompt)?;
        self.output.flush().map_err(GenError::Prompt)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(GenError::Prompt)?;
        if read == 0 {
            return Err(GenError::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn hint(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "  {}", msg.yellow()).map_err(GenError::Prompt)
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn text(&mut self, message: &str) -> Result<String> {
        self.ask(message)
    }

    fn choice(&mut self, message: &str, options: &[&str], default: Option<&str>) -> Result<String> {
        for (i, option) in options.iter().enumerate() {
            let marker = if Some(*option) == default { " (default)" } else { "" };
            writeln!(self.output, "  {}) {}{}", i + 1, option, marker.dimmed())
                .map_err(GenError::Prompt)?;
        }

        loop {
            let answer = self.ask(message)?;
            let answer = answer.trim();

            if answer.is_empty() {
                if let Some(default) = default {
                    return Ok(default.to_string());
                }
            } else if let Ok(n) = answer.parse::<usize>() {
                if let Some(option) = n.checked_sub(1).and_then(|i| options.get(i)) {
                    return Ok(option.to_string());
                }
            } else if let Some(option) = options.iter().find(|o| o.eq_ignore_ascii_case(answer)) {
                return Ok(option.to_string());
            }

            self.hint(&format!("Choose 1-{} or type an option", options.len()))?;
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let suffix = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            let answer = self.ask(&format!("{message} {suffix}"))?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.hint("Please answer y or n")?,
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! Replays a fixed answer script; every prompt consumes one answer.

    use std::collections::VecDeque;

    use super::*;

    #[derive(Debug, Clone)]
    pub enum Answer {
        Text(String),
        Bool(bool),
    }

    impl From<&str> for Answer {
        fn from(s: &str) -> Self {
            Answer::Text(s.to_string())
        }
    }

    impl From<bool> for Answer {
        fn from(b: bool) -> Self {
            Answer::Bool(b)
        }
    }

    #[derive(Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: answers.into(),
                asked: Vec::new(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }

        fn next(&mut self, message: &str) -> Result<Answer> {
            self.asked.push(message.to_string());
            self.answers.pop_front().ok_or_else(|| {
                GenError::Prompt(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("script exhausted at '{message}'"),
                ))
            })
        }
    }

    impl Prompter for ScriptedPrompter {
        fn text(&mut self, message: &str) -> Result<String> {
            match self.next(message)? {
                Answer::Text(s) => Ok(s),
                other => panic!("expected text for '{message}', got {other:?}"),
            }
        }

        fn choice(&mut self, message: &str, options: &[&str], _default: Option<&str>) -> Result<String> {
            match self.next(message)? {
                Answer::Text(s) if options.contains(&s.as_str()) => Ok(s),
                other => panic!("expected one of {options:?} for '{message}', got {other:?}"),
            }
        }

        fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
            match self.next(message)? {
                Answer::Bool(b) => Ok(b),
                other => panic!("expected bool for '{message}', got {other:?}"),
            }
        }
    }

    /// Build a script from mixed literals: `script!["Post", true, "done"]`.
    macro_rules! script {
        ($($answer:expr),* $(,)?) => {
            vec![$($crate::prompt::testing::Answer::from($answer)),*]
        };
    }
    pub(crate) use script;
}
