//! Interactive input.
//!
//! Option resolution talks to the user through the [`Prompt`] trait so the
//! logic can be driven by a scripted double in tests. [`StdinPrompt`] is
//! the real implementation: plain line-based prompts on the controlling
//! terminal.

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};

/// Narrow ask-the-user interface.
pub trait Prompt {
    /// Free-form input. Returns the trimmed line; the empty string is a
    /// valid answer.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Pick one of `choices`. `default` indexes the choice taken on empty
    /// input.
    fn select(&mut self, message: &str, choices: &[String], default: usize) -> Result<String>;
}

/// Line-based prompting on stdin/stdout.
pub struct StdinPrompt;

impl StdinPrompt {
    fn read_answer(&self) -> Result<String> {
        if !atty::is(atty::Stream::Stdin) {
            bail!("stdin is not a terminal; pass the missing values as arguments or use --yes");
        }

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(line.trim().to_string())
    }
}

impl Prompt for StdinPrompt {
    fn input(&mut self, message: &str) -> Result<String> {
        print!("{} ", message);
        io::stdout().flush()?;
        self.read_answer()
    }

    fn select(&mut self, message: &str, choices: &[String], default: usize) -> Result<String> {
        println!("{}", message);
        for (i, choice) in choices.iter().enumerate() {
            if i == default {
                println!("  {}) {} (default)", i + 1, choice);
            } else {
                println!("  {}) {}", i + 1, choice);
            }
        }
        print!("> ");
        io::stdout().flush()?;

        let answer = self.read_answer()?;
        if answer.is_empty() {
            return Ok(choices[default].clone());
        }
        if let Ok(n) = answer.parse::<usize>() {
            if (1..=choices.len()).contains(&n) {
                return Ok(choices[n - 1].clone());
            }
        }
        if let Some(choice) = choices.iter().find(|c| **c == answer) {
            return Ok(choice.clone());
        }

        Ok(choices[default].clone())
    }
}
