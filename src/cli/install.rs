use clap::Parser;

use super::{RepoArgs, TargetArgs};

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Pick skills interactively:\n    skills-cli install\n\n\
                  Install named skills:\n    skills-cli install --skills pdf,xlsx\n\n\
                  Preview installing everything:\n    skills-cli install --all --dry-run\n\n\
                  Overwrite, keeping a backup:\n    skills-cli install --all --force --backup\n\n\
                  Install into the current project:\n    skills-cli install --skills pdf --project")]
pub struct InstallArgs {
    #[command(flatten)]
    pub source: RepoArgs,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Comma-separated skill names (folder or display name)
    #[arg(long, short = 's', value_name = "NAMES")]
    pub skills: Option<String>,

    /// Install every skill found
    #[arg(long, short = 'a', conflicts_with = "skills")]
    pub all: bool,

    /// Overwrite skills that are already installed
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Back up existing skills before overwriting them
    #[arg(long)]
    pub backup: bool,

    /// Show what would be installed without installing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Refresh personal skills from the default repository:\n    skills-cli sync\n\n\
                  Refresh project skills from a team repository:\n    skills-cli sync --repo git@gitlab.com:team/skills.git --project")]
pub struct SyncArgs {
    #[command(flatten)]
    pub source: RepoArgs,

    #[command(flatten)]
    pub target: TargetArgs,
}
