use clap::Parser;

use super::{RepoArgs, TargetArgs};

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List skills in the default repository:\n    skills-cli list\n\n\
                  Show names and descriptions:\n    skills-cli list --detail\n\n\
                  List a monorepo subdirectory:\n    skills-cli list --repo https://github.com/org/repo/tree/main/tools/skills")]
pub struct ListArgs {
    #[command(flatten)]
    pub source: RepoArgs,

    /// Show a Name/Description table
    #[arg(long, short = 'd')]
    pub detail: bool,
}

/// Arguments for the installed command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Personal and project skills:\n    skills-cli installed\n\n\
                  Only project skills, with sources:\n    skills-cli installed --project --detail")]
pub struct InstalledArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Show descriptions and where each skill was installed from
    #[arg(long, short = 'd')]
    pub detail: bool,
}
