//! Install command implementation
//!
//! Fetches a repository, lets the user choose skills and installs them into the
//! target directory, reporting one line per skill and a summary.

use super::helpers::{locate_skills, open_source, select_skills};
use crate::cli::InstallArgs;
use crate::common::paths::target_dir;
use crate::error::Result;
use crate::git::{GitCli, Vcs};
use crate::installer::{Action, InstallOptions, Outcome, ProvenanceRecord, Summary, install_skill};
use crate::interrupt;
use crate::ui::Printer;
use crate::ui::select::{LineReader, StdinReader};

/// Run install command
pub fn run(args: InstallArgs, printer: &Printer) -> Result<()> {
    run_with(&GitCli, &mut StdinReader, args, printer)
}

pub(crate) fn run_with(
    vcs: &dyn Vcs,
    reader: &mut dyn LineReader,
    args: InstallArgs,
    printer: &Printer,
) -> Result<()> {
    let target = target_dir(args.target.target.as_deref(), args.target.project)?;
    printer.info(format!("Target directory: {}", target.display()));

    let source = open_source(vcs, &args.source.repo, args.source.branch.as_deref(), printer)?;
    let located = locate_skills(&source, printer);
    if located.skills.is_empty() {
        printer.warning(format!("No skills found in {}", args.source.repo));
        return Ok(());
    }

    let selected = select_skills(&located.skills, args.skills.as_deref(), args.all, reader, printer)?;
    if selected.is_empty() {
        printer.warning("No skills selected");
        return Ok(());
    }

    let record = ProvenanceRecord::new(&source.locator, source.tree.commit(vcs));
    let options = InstallOptions {
        force: args.force,
        backup: args.backup,
        dry_run: args.dry_run,
    };

    if options.dry_run {
        println!("\n{}", printer.bold("Dry run, nothing will be changed:"));
    }

    let mut outcomes = Vec::with_capacity(selected.len());
    for skill in &selected {
        interrupt::check()?;
        let outcome = install_skill(skill, &target, options, Some(&record))?;
        report(&outcome, printer);
        outcomes.push(outcome);
    }

    let summary = Summary::from_outcomes(&outcomes);
    println!("\n{} {summary}", printer.bold("Summary:"));
    if summary.succeeded() < summary.total() {
        printer.info("Use --force to overwrite existing skills");
    }
    Ok(())
}

fn report(outcome: &Outcome, printer: &Printer) {
    let line = format!("{}: {}", outcome.skill_name, outcome.message);
    match outcome.action {
        Action::Installed | Action::Updated => printer.success(line),
        Action::WouldInstall | Action::WouldUpdate => printer.info(line),
        Action::Blocked => printer.warning(line),
    }
    if let Some(path) = &outcome.backup_path {
        printer.info(format!("  Backed up to: {}", path.display()));
    }
    for warning in &outcome.warnings {
        printer.warning(format!("  {warning}"));
    }
}
