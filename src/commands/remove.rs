//! Remove command implementation
//!
//! Deletes installed skills from a skills directory after confirmation.

use super::helpers::select_skills;
use crate::cli::RemoveArgs;
use crate::common::fs::remove_dir_all;
use crate::common::paths::target_dir;
use crate::error::Result;
use crate::interrupt;
use crate::skill::scan_children;
use crate::ui::Printer;
use crate::ui::select::{LineReader, StdinReader, confirm};

/// Run remove command
pub fn run(args: RemoveArgs, printer: &Printer) -> Result<()> {
    run_with(&mut StdinReader, args, printer)
}

pub(crate) fn run_with(reader: &mut dyn LineReader, args: RemoveArgs, printer: &Printer) -> Result<()> {
    let target = target_dir(args.target.target.as_deref(), args.target.project)?;
    if !target.is_dir() {
        printer.warning(format!("Skills directory not found: {}", target.display()));
        return Ok(());
    }

    let installed = scan_children(&target);
    if installed.is_empty() {
        printer.warning(format!("No skills installed in {}", target.display()));
        return Ok(());
    }

    let selected = select_skills(&installed, args.skills.as_deref(), args.all, reader, printer)?;
    if selected.is_empty() {
        printer.warning("No skills selected");
        return Ok(());
    }

    if args.dry_run {
        println!("\n{}", printer.bold("Dry run, would remove:"));
        for skill in &selected {
            println!("  - {} ({})", skill.display_name(), skill.path.display());
        }
        return Ok(());
    }

    if !args.force {
        println!("\n{}", printer.bold("Skills to remove:"));
        for skill in &selected {
            println!("  - {}", skill.display_name());
        }
        if !confirm(reader, "Confirm removal?") {
            printer.info("Cancelled");
            return Ok(());
        }
    }

    let mut removed = 0;
    for skill in &selected {
        interrupt::check()?;
        match remove_dir_all(&skill.path) {
            Ok(()) => {
                printer.success(format!("Removed: {}", skill.display_name()));
                removed += 1;
            }
            Err(e) => printer.error(format!("Failed to remove {}: {e}", skill.display_name())),
        }
    }

    println!("\n{}", printer.bold(format!("Removed {removed}/{} skills", selected.len())));
    Ok(())
}
