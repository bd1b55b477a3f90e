//! List command implementation
//!
//! Fetches a repository and prints the skills found in it.

use super::helpers::{locate_skills, open_source};
use crate::cli::ListArgs;
use crate::error::Result;
use crate::git::{GitCli, Vcs};
use crate::ui::Printer;
use crate::ui::formatter;

/// Run list command
pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    run_with(&GitCli, args, printer)
}

pub(crate) fn run_with(vcs: &dyn Vcs, args: ListArgs, printer: &Printer) -> Result<()> {
    let source = open_source(vcs, &args.source.repo, args.source.branch.as_deref(), printer)?;
    let located = locate_skills(&source, printer);

    if located.skills.is_empty() {
        printer.warning(format!("No skills found in {}", args.source.repo));
        return Ok(());
    }

    println!("{}", printer.bold(format!("Skills in {}:", args.source.repo)));
    print!("{}", formatter::for_detail(args.detail, false).format(&located.skills, printer));
    println!("\n{}", printer.bold(format!("Total: {} skills", located.skills.len())));
    Ok(())
}
