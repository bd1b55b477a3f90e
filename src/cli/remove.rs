use clap::Parser;

use super::TargetArgs;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Pick skills to remove interactively:\n    skills-cli remove\n\n\
                  Preview removing a skill:\n    skills-cli remove --skills pdf --dry-run\n\n\
                  Remove everything without asking:\n    skills-cli remove --all --force")]
pub struct RemoveArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Comma-separated skill names (folder or display name)
    #[arg(long, short = 's', value_name = "NAMES")]
    pub skills: Option<String>,

    /// Remove every installed skill
    #[arg(long, short = 'a', conflicts_with = "skills")]
    pub all: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Show what would be removed without removing
    #[arg(long)]
    pub dry_run: bool,
}
