//! Formatters for skill lists in different modes
//!
//! The simple mode prints names on one line; the detailed mode prints a
//! Name/Description table and, for installed skills, where each one came from.

use std::fmt::Write;

use super::Printer;
use crate::common::string_utils::truncate;
use crate::installer::provenance;
use crate::skill::Skill;

const DESCRIPTION_WIDTH: usize = 60;
const SOURCE_WIDTH: usize = 50;

/// Formatter trait for rendering a list of skills
pub trait SkillListFormatter {
    fn format(&self, skills: &[Skill], printer: &Printer) -> String;
}

/// Comma-separated display names
pub struct SimpleFormatter;

impl SkillListFormatter for SimpleFormatter {
    fn format(&self, skills: &[Skill], _printer: &Printer) -> String {
        let names: Vec<&str> = skills.iter().map(Skill::display_name).collect();
        format!("\n  {}\n", names.join(", "))
    }
}

/// Name/Description table
pub struct DetailedFormatter {
    /// Add a `↳ source (branch@commit)` line for skills with provenance
    pub show_source: bool,
}

impl SkillListFormatter for DetailedFormatter {
    fn format(&self, skills: &[Skill], printer: &Printer) -> String {
        let width = skills
            .iter()
            .map(|s| s.display_name().chars().count())
            .max()
            .unwrap_or(0)
            .max("Name".len());

        let mut out = String::new();
        let _ = writeln!(out, "\n  {:<width$}  Description", "Name");
        let _ = writeln!(out, "  {}  {}", "-".repeat(width), "-".repeat(50));

        for skill in skills {
            let description = truncate(skill.description.as_deref().unwrap_or("-"), DESCRIPTION_WIDTH);
            let name = format!("{:<width$}", skill.display_name());
            let _ = writeln!(out, "  {}  {description}", printer.cyan(name));

            if !self.show_source {
                continue;
            }
            if let Some(record) = provenance::read(&skill.path) {
                let source = truncate(
                    record.source_reference.as_deref().unwrap_or("-"),
                    SOURCE_WIDTH,
                );
                let line = format!(
                    "↳ {source} ({}@{})",
                    record.branch.as_deref().unwrap_or("-"),
                    record.commit.as_deref().unwrap_or("-")
                );
                let _ = writeln!(out, "  {}  {}", " ".repeat(width), printer.yellow(line));
            }
        }
        out
    }
}

/// Pick the formatter for the `--detail` flag.
pub fn for_detail(detail: bool, show_source: bool) -> Box<dyn SkillListFormatter> {
    if detail {
        Box::new(DetailedFormatter { show_source })
    } else {
        Box::new(SimpleFormatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::RepoLocator;
    use crate::installer::ProvenanceRecord;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn skill(folder: &str, name: Option<&str>, description: Option<&str>) -> Skill {
        Skill {
            path: PathBuf::from(format!("/nowhere/{folder}")),
            folder_name: folder.to_string(),
            name: name.map(ToString::to_string),
            description: description.map(ToString::to_string),
        }
    }

    #[test]
    fn test_simple_format() {
        let out = SimpleFormatter.format(
            &[skill("pdf", Some("PDF"), None), skill("xlsx", None, None)],
            &Printer::new(false, false),
        );
        assert_eq!(out, "\n  PDF, xlsx\n");
    }

    #[test]
    fn test_detailed_format_truncates_description() {
        let long = "x".repeat(80);
        let out = DetailedFormatter { show_source: false }.format(
            &[skill("pdf", Some("PDF"), Some(&long))],
            &Printer::new(false, false),
        );
        assert!(out.contains("Name  Description"));
        assert!(out.contains(&format!("PDF   {}...", "x".repeat(57))));
    }

    #[test]
    fn test_detailed_format_shows_source() {
        let temp = TempDir::new().unwrap();
        let record = ProvenanceRecord::new(
            &RepoLocator::resolve("https://github.com/o/r").with_branch("main"),
            Some("abc1234".to_string()),
        );
        provenance::write(temp.path(), &record).unwrap();
        let installed = Skill {
            path: temp.path().to_path_buf(),
            folder_name: "pdf".to_string(),
            name: None,
            description: None,
        };

        let out = DetailedFormatter { show_source: true }.format(&[installed], &Printer::new(false, false));
        assert!(out.contains("↳ https://github.com/o/r (main@abc1234)"));
    }
}
