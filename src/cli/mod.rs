//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - source: `--repo`/`--branch` and `--project`/`--target`, shared by several commands
//! - list: list and installed command arguments
//! - install: install and sync command arguments
//! - remove: remove command arguments
//! - pack: pack command arguments
//! - validate: validate command arguments
//! - completions: completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod install;
pub mod list;
pub mod pack;
pub mod remove;
pub mod source;
pub mod validate;

pub use completions::CompletionsArgs;
pub use install::{InstallArgs, SyncArgs};
pub use list::{InstalledArgs, ListArgs};
pub use pack::PackArgs;
pub use remove::RemoveArgs;
pub use source::{RepoArgs, TargetArgs};
pub use validate::ValidateArgs;

/// Repository listed and installed from when `--repo` is not given
pub const DEFAULT_REPO: &str = "https://github.com/anthropics/skills/tree/main/skills";

/// skills-cli - install skills from git repositories
///
/// Find skill bundles (directories with a SKILL.md) in any git repository and install
/// them into your personal or project skills directory.
#[derive(Parser, Debug)]
#[command(
    name = "skills-cli",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install, update and audit skills straight from git repositories",
    long_about = "skills-cli finds skill bundles (directories containing a SKILL.md) inside any git \
                  repository, including monorepos, and installs them into ~/.claude/skills or \
                  ./.claude/skills with dry-run, backup and provenance tracking.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skills-cli list --detail                      \x1b[90m# List skills in the default repository\x1b[0m\n   \
                  skills-cli install --all --dry-run            \x1b[90m# Preview what would be installed\x1b[0m\n   \
                  skills-cli install --skills pdf,xlsx --backup \x1b[90m# Install two skills, backing up old copies\x1b[0m\n   \
                  skills-cli installed --detail                 \x1b[90m# Show installed skills and their sources\x1b[0m\n   \
                  skills-cli remove --skills pdf --dry-run      \x1b[90m# Preview a removal\x1b[0m\n   \
                  skills-cli validate --repo <url>              \x1b[90m# Check SKILL.md files in a repository\x1b[0m\n   \
                  skills-cli doctor                             \x1b[90m# Diagnose skills directories\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print full error diagnostics
    #[arg(long, global = true, env = "SKILLS_CLI_DEBUG")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List skills available in a repository
    List(ListArgs),

    /// List installed skills
    Installed(InstalledArgs),

    /// Install skills from a repository
    Install(InstallArgs),

    /// Remove installed skills
    #[command(alias = "uninstall")]
    Remove(RemoveArgs),

    /// Pack skills into zip files for Claude Desktop
    Pack(PackArgs),

    /// Overwrite local skills with the repository's current versions
    Sync(SyncArgs),

    /// Check SKILL.md files for problems
    Validate(ValidateArgs),

    /// Diagnose skills directories
    Doctor,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
