//! Pack command implementation
//!
//! Zips skills for upload to Claude Desktop and writes a manifest listing them.

use super::helpers::{locate_skills, open_source};
use crate::cli::PackArgs;
use crate::common::string_utils::split_names;
use crate::error::{Result, SkillsError};
use crate::git::{GitCli, Vcs};
use crate::interrupt;
use crate::pack::{Manifest, pack_skill, write_manifest};
use crate::skill::Skill;
use crate::ui::Printer;

/// Run pack command
pub fn run(args: PackArgs, printer: &Printer) -> Result<()> {
    run_with(&GitCli, args, printer)
}

pub(crate) fn run_with(vcs: &dyn Vcs, args: PackArgs, printer: &Printer) -> Result<()> {
    let source = open_source(vcs, &args.source.repo, args.source.branch.as_deref(), printer)?;
    let located = locate_skills(&source, printer);
    if located.skills.is_empty() {
        printer.warning(format!("No skills found in {}", args.source.repo));
        return Ok(());
    }

    let selected: Vec<&Skill> = match args.skills.as_deref() {
        None => located.skills.iter().collect(),
        Some(names) => {
            let requested = split_names(names);
            let selected: Vec<&Skill> = located
                .skills
                .iter()
                .filter(|s| requested.iter().any(|n| s.matches(n)))
                .collect();
            if selected.is_empty() {
                return Err(SkillsError::NoMatchingSkills {
                    requested: requested.join(", "),
                    available: located
                        .skills
                        .iter()
                        .map(|s| s.folder_name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                });
            }
            selected
        }
    };

    printer.info(format!(
        "Packing {} skills into {}",
        selected.len(),
        args.output.display()
    ));

    let mut manifest = Manifest::default();
    for skill in selected {
        interrupt::check()?;
        let entry = pack_skill(skill, &args.output)?;
        printer.success(format!("Packed: {} -> {}", entry.name, entry.zip));
        manifest.skills.push(entry);
    }

    let manifest_path = write_manifest(&args.output, &manifest)?;
    printer.info(format!("Manifest: {}", manifest_path.display()));
    Ok(())
}
