//! Interactive prompting capability.
//!
//! The scaffolder talks to a [`Prompter`] rather than the terminal directly,
//! so its core logic (id derivation, file writing, conflict checks) runs in
//! tests against a scripted implementation.

use std::io::{BufRead, Write};

use anyhow::Result;

/// Asks the user questions. Answers come from the terminal in normal use and
/// from a script in tests.
pub trait Prompter {
    /// Free-form input; keeps asking until the answer is non-empty.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Pick one of `options`; returns the chosen index.
    fn select(&mut self, message: &str, options: &[String]) -> Result<usize>;

    /// Yes/no question. An empty answer picks `default_yes`; closed stdin
    /// declines.
    fn confirm(&mut self, message: &str, default_yes: bool) -> Result<bool>;
}

/// Terminal prompter over stdin/stdout.
pub struct TermPrompter;

impl TermPrompter {
    fn read_line(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = std::io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl Prompter for TermPrompter {
    fn input(&mut self, message: &str) -> Result<String> {
        loop {
            print!("{message} ");
            std::io::stdout().flush()?;
            match self.read_line()? {
                None => anyhow::bail!("stdin closed while waiting for input"),
                Some(answer) if answer.is_empty() => {
                    println!("A value is required.");
                }
                Some(answer) => return Ok(answer),
            }
        }
    }

    fn select(&mut self, message: &str, options: &[String]) -> Result<usize> {
        println!("{message}");
        for (i, option) in options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }
        loop {
            print!("Enter a number (1-{}): ", options.len());
            std::io::stdout().flush()?;
            match self.read_line()? {
                None => anyhow::bail!("stdin closed while waiting for a selection"),
                Some(answer) => match answer.parse::<usize>() {
                    Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                    _ => println!("Please enter a number between 1 and {}.", options.len()),
                },
            }
        }
    }

    fn confirm(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
        print!("{message} {hint} ");
        std::io::stdout().flush()?;
        match self.read_line()? {
            None => Ok(false),
            Some(answer) if answer.is_empty() => Ok(default_yes),
            Some(answer) => Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes")),
        }
    }
}
