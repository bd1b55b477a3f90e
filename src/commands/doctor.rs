//! Doctor command implementation
//!
//! Reports on the personal and project skills directories: how many skills they hold,
//! which skills fail validation, directories that are not skills, and backups.

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::paths::{BACKUP_DIR, Scope, distinct_roots};
use crate::error::{Result, SkillsError};
use crate::skill::validate::validate_skill;
use crate::skill::{SKILL_FILE, scan_children};
use crate::ui::Printer;

/// Run doctor command
pub fn run(printer: &Printer) -> Result<()> {
    let dirs = [
        (Scope::Personal, Scope::Personal.skills_dir()?),
        (Scope::Project, Scope::Project.skills_dir()?),
    ];
    diagnose(&dirs, printer)
}

/// Directories directly under `dir` that are neither hidden nor skills
fn orphaned_dirs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut orphans: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .filter(|p| {
            p.file_name()
                .is_some_and(|n| !n.to_string_lossy().starts_with('.'))
        })
        .filter(|p| !p.join(SKILL_FILE).exists())
        .collect();
    orphans.sort();
    orphans
}

fn backup_count(dir: &Path) -> Option<usize> {
    let entries = fs::read_dir(dir.join(BACKUP_DIR)).ok()?;
    Some(entries.filter_map(|e| e.ok()).count())
}

pub(crate) fn diagnose(dirs: &[(Scope, PathBuf)], printer: &Printer) -> Result<()> {
    let dirs = &distinct_roots(dirs.to_vec());
    println!("\n{}\n", printer.bold("skills-cli doctor"));

    let mut warnings = Vec::new();
    for (scope, dir) in dirs {
        println!("  {} {}", printer.cyan(format!("{} skills:", scope.label())), dir.display());
        if !dir.is_dir() {
            println!("    {} Directory does not exist", printer.yellow("○"));
            continue;
        }

        let skills = scan_children(dir);
        println!(
            "    {} Directory exists ({} skills)",
            printer.green("✓"),
            skills.len()
        );
        warnings.extend(
            skills
                .iter()
                .filter(|s| !validate_skill(&s.path).is_empty())
                .map(|s| format!("{} skill '{}' has issues", scope.label(), s.folder_name)),
        );
    }

    println!("\n  {}", printer.cyan("Checking for orphaned directories..."));
    let orphans: Vec<PathBuf> = dirs.iter().flat_map(|(_, dir)| orphaned_dirs(dir)).collect();
    if orphans.is_empty() {
        println!("    {} No orphaned directories", printer.green("✓"));
    }
    for orphan in &orphans {
        println!(
            "    {} {} (no {SKILL_FILE})",
            printer.red("✗"),
            orphan.display()
        );
    }

    println!("\n  {}", printer.cyan("Checking for backup directories..."));
    let mut any_backups = false;
    for (_, dir) in dirs {
        if let Some(count) = backup_count(dir) {
            any_backups = true;
            println!(
                "    {} {} ({count} backups)",
                printer.yellow("○"),
                dir.join(BACKUP_DIR).display()
            );
        }
    }
    if !any_backups {
        println!("    {} No backup directories", printer.green("✓"));
    }

    println!("\n{}", printer.bold("Summary:"));
    if !warnings.is_empty() {
        printer.warning(format!("{} warnings", warnings.len()));
        for warning in &warnings {
            println!("    • {warning}");
        }
    }
    if !orphans.is_empty() {
        return Err(SkillsError::DoctorFoundIssues {
            count: orphans.len(),
        });
    }
    printer.success("No issues found");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_skill(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join(SKILL_FILE),
            "---\nname: ok\ndescription: fine\n---\nBody\n",
        )
        .unwrap();
    }

    #[test]
    fn test_healthy_directories() {
        let temp = TempDir::new().unwrap();
        let personal = temp.path().join("personal");
        write_skill(&personal.join("pdf"));
        fs::create_dir_all(personal.join(BACKUP_DIR).join("pdf_20240101_000000")).unwrap();

        let dirs = [
            (Scope::Personal, personal.clone()),
            (Scope::Project, temp.path().join("missing")),
        ];
        assert!(diagnose(&dirs, &Printer::new(false, false)).is_ok());
        assert_eq!(backup_count(&personal), Some(1));
    }

    #[test]
    fn test_orphans_are_issues() {
        let temp = TempDir::new().unwrap();
        let personal = temp.path().join("personal");
        write_skill(&personal.join("pdf"));
        fs::create_dir_all(personal.join("leftover")).unwrap();
        fs::create_dir_all(personal.join(".hidden")).unwrap();

        assert_eq!(orphaned_dirs(&personal), vec![personal.join("leftover")]);

        let err = diagnose(&[(Scope::Personal, personal)], &Printer::new(false, false)).unwrap_err();
        assert!(matches!(err, SkillsError::DoctorFoundIssues { count: 1 }));
    }

    #[test]
    fn test_shared_directory_is_checked_once() {
        let temp = TempDir::new().unwrap();
        let shared = temp.path().join("home/.claude/skills");
        write_skill(&shared.join("pdf"));
        fs::create_dir_all(shared.join("leftover")).unwrap();

        let dirs = [
            (Scope::Personal, shared.clone()),
            (Scope::Project, temp.path().join("home/./.claude/skills")),
        ];
        let err = diagnose(&dirs, &Printer::new(false, false)).unwrap_err();
        assert!(matches!(err, SkillsError::DoctorFoundIssues { count: 1 }));
    }
}
