//! skills-cli - install skills from git repositories
//!
//! Finds skill bundles (directories with a SKILL.md) in any git repository and installs
//! them into the personal or project skills directory, with dry runs, backups and
//! provenance tracking.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod common;
mod error;
mod git;
mod installer;
mod interrupt;
mod pack;
mod skill;
mod temp;
mod ui;

use cli::{Cli, Commands};
use error::{Result, SkillsError};
use ui::Printer;

fn run(command: Commands, printer: &Printer) -> Result<()> {
    match command {
        Commands::List(args) => commands::list::run(args, printer),
        Commands::Installed(args) => commands::installed::run(args, printer),
        Commands::Install(args) => commands::install::run(args, printer),
        Commands::Remove(args) => commands::remove::run(args, printer),
        Commands::Pack(args) => commands::pack::run(args, printer),
        Commands::Sync(args) => commands::sync::run(args, printer),
        Commands::Validate(args) => commands::validate::run(args, printer),
        Commands::Doctor => commands::doctor::run(printer),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn report_error(err: SkillsError, debug: bool, printer: &Printer) -> i32 {
    let code = err.exit_code();
    if debug {
        eprintln!("{:?}", miette::Report::new(err));
    } else {
        printer.error(format!("Error: {err}"));
        if let Some(help) = err.help() {
            eprintln!("  help: {help}");
        }
    }
    code
}

fn main() {
    let cli = Cli::parse();
    let printer = Printer::from_flags(cli.no_color, cli.verbose);

    if let Err(e) = interrupt::install_handler() {
        printer.debug(format!("Ctrl-C handler not installed: {e}"));
    }

    if let Err(e) = run(cli.command, &printer) {
        let code = report_error(e, cli.debug, &printer);
        std::process::exit(code);
    }
}
