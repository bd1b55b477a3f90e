//! Interactive selection and confirmation
//!
//! All operator input goes through [`LineReader`], one line at a time. End of input
//! and Ctrl-C both read as "nothing", never as an error.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use inquire::Text;

use super::Printer;
use crate::interrupt;
use crate::skill::Skill;

/// Source of operator input.
pub trait LineReader {
    /// Show `prompt` and read one line; `None` on end of input or interrupt.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Reads from the terminal, or from piped stdin when there is no terminal.
#[derive(Debug, Default)]
pub struct StdinReader;

impl StdinReader {
    fn read_tty(prompt: &str) -> Option<String> {
        let answer = Text::new(prompt).prompt().ok();
        // A Ctrl-C that reached our handler during the prompt cancels the prompt only
        if interrupt::take() {
            return None;
        }
        answer
    }

    fn read_piped(prompt: &str) -> Option<String> {
        print!("{prompt} ");
        let _ = io::stdout().flush();

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut line = String::new();
            let read = io::stdin().lock().read_line(&mut line);
            let _ = tx.send(read.ok().filter(|n| *n > 0).map(|_| line));
        });

        loop {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(line) => return line,
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    if interrupt::take() {
                        println!();
                        return None;
                    }
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => return None,
            }
        }
    }
}

impl LineReader for StdinReader {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if io::stdin().is_terminal() {
            Self::read_tty(prompt)
        } else {
            Self::read_piped(prompt)
        }
    }
}

/// Canned answers, for tests.
#[cfg(test)]
pub struct ScriptedReader {
    pub answers: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedReader {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl LineReader for ScriptedReader {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.answers.pop_front()
    }
}

/// Zero-based indices picked by `input` out of `count` items.
///
/// `all`, `*` or an empty line pick everything; `q`, `quit` or `exit` pick nothing.
/// Otherwise a comma list of one-based numbers and `a-b` ranges; numbers out of range
/// are skipped and repeats are dropped. `None` when the input does not parse.
pub fn parse_selection(input: &str, count: usize) -> Option<Vec<usize>> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" | "all" | "*" => return Some((0..count).collect()),
        "q" | "quit" | "exit" => return Some(Vec::new()),
        _ => {}
    }

    let mut picked = Vec::new();
    let mut push = |n: usize| {
        if (1..=count).contains(&n) && !picked.contains(&(n - 1)) {
            picked.push(n - 1);
        }
    };

    for part in input.split(',') {
        let part = part.trim();
        if let Some((start, end)) = part.split_once('-') {
            let start: usize = start.trim().parse().ok()?;
            let end: usize = end.trim().parse().ok()?;
            (start..=end.min(count)).for_each(&mut push);
        } else {
            push(part.parse().ok()?);
        }
    }

    Some(picked)
}

/// Show `skills` as a numbered list and let the operator pick some.
pub fn interactive_select(skills: &[Skill], reader: &mut dyn LineReader, printer: &Printer) -> Vec<Skill> {
    println!("\n{}\n", printer.bold("Available Skills:"));
    for (i, skill) in skills.iter().enumerate() {
        println!(
            "  {}. {}",
            printer.cyan(format!("{:3}", i + 1)),
            printer.bold(skill.display_name())
        );
        println!(
            "       {}",
            printer.yellow(skill.description.as_deref().unwrap_or("No description"))
        );
    }

    println!("\n{}", printer.bold("Enter selection:"));
    println!("  - 'all' or '*' to select all");
    println!("  - Comma-separated numbers (e.g., 1,3,5)");
    println!("  - Range (e.g., 1-5)");
    println!("  - 'q' to quit\n");

    let Some(input) = reader.read_line(">") else {
        return Vec::new();
    };

    match parse_selection(&input, skills.len()) {
        Some(indices) => indices.into_iter().map(|i| skills[i].clone()).collect(),
        None => {
            printer.error("Invalid selection format");
            Vec::new()
        }
    }
}

/// Ask a `[y/N]` question; anything but `y`/`yes` is no.
pub fn confirm(reader: &mut dyn LineReader, question: &str) -> bool {
    reader
        .read_line(&format!("{question} [y/N]"))
        .is_some_and(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn skills(n: usize) -> Vec<Skill> {
        (0..n)
            .map(|i| Skill {
                path: PathBuf::from(format!("/repo/s{i}")),
                folder_name: format!("s{i}"),
                name: None,
                description: None,
            })
            .collect()
    }

    #[test]
    fn test_parse_selection_all() {
        for input in ["all", "*", "", "  ALL  "] {
            assert_eq!(parse_selection(input, 3), Some(vec![0, 1, 2]), "{input:?}");
        }
    }

    #[test]
    fn test_parse_selection_quit() {
        for input in ["q", "quit", "exit"] {
            assert_eq!(parse_selection(input, 3), Some(vec![]));
        }
    }

    #[test]
    fn test_parse_selection_numbers_and_ranges() {
        assert_eq!(parse_selection("1,3", 5), Some(vec![0, 2]));
        assert_eq!(parse_selection("2-4", 5), Some(vec![1, 2, 3]));
        assert_eq!(parse_selection("5, 1-2", 5), Some(vec![4, 0, 1]));
    }

    #[test]
    fn test_parse_selection_skips_out_of_range_and_repeats() {
        assert_eq!(parse_selection("0,2,9", 3), Some(vec![1]));
        assert_eq!(parse_selection("1,1,1-2", 3), Some(vec![0, 1]));
        assert_eq!(parse_selection("3-1", 3), Some(vec![]));
        assert_eq!(parse_selection("2-9", 3), Some(vec![1, 2]));
    }

    #[test]
    fn test_parse_selection_huge_range_is_clamped() {
        assert_eq!(parse_selection("1-99999999999", 3), Some(vec![0, 1, 2]));
        assert_eq!(parse_selection("99999999998-99999999999", 3), Some(vec![]));
    }

    #[test]
    fn test_parse_selection_invalid() {
        assert_eq!(parse_selection("pdf", 3), None);
        assert_eq!(parse_selection("1,,2", 3), None);
        assert_eq!(parse_selection("1-x", 3), None);
    }

    #[test]
    fn test_interactive_select_picks_listed_skills() {
        let all = skills(4);
        let mut reader = ScriptedReader::new(&["2,4"]);
        let picked = interactive_select(&all, &mut reader, &Printer::new(false, false));
        let names: Vec<&str> = picked.iter().map(|s| s.folder_name.as_str()).collect();
        assert_eq!(names, vec!["s1", "s3"]);
    }

    #[test]
    fn test_interactive_select_end_of_input_selects_nothing() {
        let mut reader = ScriptedReader::new(&[]);
        assert!(interactive_select(&skills(2), &mut reader, &Printer::new(false, false)).is_empty());
    }

    #[test]
    fn test_interactive_select_invalid_selects_nothing() {
        let mut reader = ScriptedReader::new(&["first"]);
        assert!(interactive_select(&skills(2), &mut reader, &Printer::new(false, false)).is_empty());
    }

    #[test]
    fn test_confirm() {
        assert!(confirm(&mut ScriptedReader::new(&["y"]), "Remove?"));
        assert!(confirm(&mut ScriptedReader::new(&[" YES "]), "Remove?"));
        assert!(!confirm(&mut ScriptedReader::new(&[""]), "Remove?"));
        assert!(!confirm(&mut ScriptedReader::new(&[]), "Remove?"));
    }
}
