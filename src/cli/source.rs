use std::path::PathBuf;

use clap::Args;

use super::DEFAULT_REPO;

/// Which repository to read skills from
#[derive(Args, Debug, Clone)]
pub struct RepoArgs {
    /// Repository URL, browser tree URL, SSH address or local directory
    #[arg(long, short = 'r', env = "SKILLS_CLI_REPO", default_value = DEFAULT_REPO)]
    pub repo: String,

    /// Git branch (default: the one in the URL, else the remote's default branch)
    #[arg(long, short = 'b')]
    pub branch: Option<String>,
}

/// Which skills directory to operate on
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Use the project directory ./.claude/skills instead of ~/.claude/skills
    #[arg(long, short = 'p')]
    pub project: bool,

    /// Custom skills directory
    #[arg(long, short = 't', env = "SKILLS_CLI_TARGET", value_name = "DIR")]
    pub target: Option<PathBuf>,
}
