use std::path::PathBuf;

use clap::Parser;

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check installed skills:\n    skills-cli validate\n\n\
                  Check one skill:\n    skills-cli validate --path ./my-skill\n\n\
                  Check a repository:\n    skills-cli validate --repo https://github.com/org/skills")]
pub struct ValidateArgs {
    /// Skill directory or SKILL.md file to check
    #[arg(long, conflicts_with = "repo")]
    pub path: Option<PathBuf>,

    /// Check the skills in this repository instead of installed ones
    #[arg(long, short = 'r')]
    pub repo: Option<String>,

    /// Git branch for --repo
    #[arg(long, short = 'b', requires = "repo")]
    pub branch: Option<String>,

    /// Check project skills instead of personal ones
    #[arg(long, short = 'p')]
    pub project: bool,
}
