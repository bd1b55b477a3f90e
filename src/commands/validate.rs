//! Validate command implementation
//!
//! Checks SKILL.md files of a single directory, of a repository, or of the installed
//! skills, and fails when any check does.

use std::path::{Path, PathBuf};

use super::helpers::{locate_skills, open_source};
use crate::cli::ValidateArgs;
use crate::common::paths::Scope;
use crate::error::{Result, SkillsError};
use crate::git::{GitCli, Vcs};
use crate::skill::validate::validate_skill;
use crate::skill::{Skill, scan_children};
use crate::ui::Printer;

/// Run validate command
pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    run_with(&GitCli, args, printer)
}

pub(crate) fn run_with(vcs: &dyn Vcs, args: ValidateArgs, printer: &Printer) -> Result<()> {
    if let Some(path) = &args.path {
        let dir = skill_dir_for(path);
        let name = dir
            .file_name()
            .map_or_else(|| dir.display().to_string(), |n| n.to_string_lossy().into_owned());
        return report(&[(name, dir)], printer);
    }

    if let Some(repo) = &args.repo {
        // The checkout must outlive the checks
        let source = open_source(vcs, repo, args.branch.as_deref(), printer)?;
        let located = locate_skills(&source, printer);
        return report(&named(&located.skills), printer);
    }

    let scope = if args.project { Scope::Project } else { Scope::Personal };
    let installed = scan_children(&scope.skills_dir()?);
    report(&named(&installed), printer)
}

/// A `SKILL.md` path stands for its directory.
fn skill_dir_for(path: &Path) -> PathBuf {
    if path.is_file() {
        path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    } else {
        path.to_path_buf()
    }
}

fn named(skills: &[Skill]) -> Vec<(String, PathBuf)> {
    skills
        .iter()
        .map(|s| (s.display_name().to_string(), s.path.clone()))
        .collect()
}

fn report(targets: &[(String, PathBuf)], printer: &Printer) -> Result<()> {
    if targets.is_empty() {
        printer.warning("No skills to validate");
        return Ok(());
    }

    println!("\n{}\n", printer.bold(format!("Validating {} skills...", targets.len())));

    let mut total = 0;
    for (name, dir) in targets {
        let issues = validate_skill(dir);
        if issues.is_empty() {
            println!("  {} {name}", printer.green("✓"));
            continue;
        }
        println!("  {} {}", printer.red("✗"), printer.bold(name));
        for issue in &issues {
            println!("    {} {issue}", printer.yellow("•"));
        }
        total += issues.len();
    }
    println!();

    if total > 0 {
        printer.warning(format!("Found {total} issues in {} skills", targets.len()));
        return Err(SkillsError::ValidationFailed { count: total });
    }
    printer.success(format!("All {} skills are valid", targets.len()));
    Ok(())
}
