// src/utils/prompt.rs

//! Operator prompts.
//!
//! Both yes/no prompts compare answers trimmed and case-insensitively. The
//! continue prompt only stops on an explicit "no", while export only proceeds
//! on an explicit "yes".

use console::style;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

use crate::error::{AppError, Result};

/// Interactive decisions taken by the person running the crawl.
pub trait Operator {
    /// Ask for a free-text value.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Ask whether to load the page after `page`.
    fn confirm_continue(&mut self, page: usize) -> Result<bool>;

    /// Ask whether to write the collected results to disk.
    fn confirm_export(&mut self) -> Result<bool>;
}

/// True unless the answer is an explicit "n"/"no".
pub fn continues(answer: &str) -> bool {
    !matches!(answer.trim().to_lowercase().as_str(), "n" | "no")
}

/// True only for an explicit "y"/"yes".
pub fn accepts(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Operator backed by the controlling terminal.
pub struct TerminalOperator {
    theme: ColorfulTheme,
}

impl TerminalOperator {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn read(&self, prompt: String, allow_empty: bool) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()
            .map_err(AppError::prompt)
    }
}

impl Default for TerminalOperator {
    fn default() -> Self {
        Self::new()
    }
}

impl Operator for TerminalOperator {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer = self.read(style(prompt).green().bold().to_string(), false)?;
        Ok(answer.trim().to_string())
    }

    fn confirm_continue(&mut self, page: usize) -> Result<bool> {
        let prompt = format!("Scrape page {}? (y/n)", page + 1);
        let answer = self.read(style(prompt).yellow().bold().to_string(), true)?;
        Ok(continues(&answer))
    }

    fn confirm_export(&mut self) -> Result<bool> {
        let prompt = style("Save results locally? (y/n)").yellow().bold();
        let answer = self.read(prompt.to_string(), true)?;
        Ok(accepts(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continue_stops_only_on_no() {
        assert!(!continues("n"));
        assert!(!continues("N"));
        assert!(!continues(" no "));
        assert!(continues("y"));
        assert!(continues(""));
        assert!(continues("maybe"));
    }

    #[test]
    fn test_export_requires_yes() {
        assert!(accepts("y"));
        assert!(accepts("Y"));
        assert!(accepts("yes\n"));
        assert!(!accepts(""));
        assert!(!accepts("n"));
        assert!(!accepts("sure"));
    }
}
