//! Terminal output
//!
//! This module handles:
//! - Status lines (info, success, warning, error, debug) through [`Printer`]
//! - A spinner for long-running fetches ([`progress`])
//! - Interactive skill selection and confirmation prompts ([`select`])
//! - Skill list rendering ([`formatter`])
//!
//! Color and verbosity live in a [`Printer`] value that is handed to whatever needs
//! to print; there is no global output state.

pub mod formatter;
pub mod progress;
pub mod select;

use std::env;
use std::fmt::Display;
use std::io::IsTerminal;

use console::Style;

/// Output settings passed down the call chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    color: bool,
    verbose: bool,
}

impl Printer {
    pub fn new(color: bool, verbose: bool) -> Self {
        Self { color, verbose }
    }

    /// Colors unless `--no-color`, `NO_COLOR`, or stdout is not a terminal.
    pub fn from_flags(no_color: bool, verbose: bool) -> Self {
        let color = !no_color && env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
        Self::new(color, verbose)
    }

    fn paint(&self, style: Style, text: impl Display) -> String {
        style.force_styling(self.color).apply_to(text).to_string()
    }

    pub fn bold(&self, text: impl Display) -> String {
        self.paint(Style::new().bold(), text)
    }

    pub fn cyan(&self, text: impl Display) -> String {
        self.paint(Style::new().cyan(), text)
    }

    pub fn green(&self, text: impl Display) -> String {
        self.paint(Style::new().green(), text)
    }

    pub fn yellow(&self, text: impl Display) -> String {
        self.paint(Style::new().yellow(), text)
    }

    pub fn red(&self, text: impl Display) -> String {
        self.paint(Style::new().red(), text)
    }

    pub fn info(&self, msg: impl Display) {
        println!("{} {msg}", self.paint(Style::new().blue(), "ℹ"));
    }

    pub fn success(&self, msg: impl Display) {
        println!("{} {msg}", self.green("✓"));
    }

    pub fn warning(&self, msg: impl Display) {
        println!("{} {msg}", self.yellow("⚠"));
    }

    pub fn error(&self, msg: impl Display) {
        eprintln!("{} {msg}", self.red("✗"));
    }

    /// Only shown with `--verbose`
    pub fn debug(&self, msg: impl Display) {
        if self.verbose {
            eprintln!("{} {msg}", self.paint(Style::new().dim(), "·"));
        }
    }
}
