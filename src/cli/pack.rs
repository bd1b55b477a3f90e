use std::path::PathBuf;

use clap::Parser;

use super::RepoArgs;

/// Arguments for the pack command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Pack every skill:\n    skills-cli pack --output dist/desktop\n\n\
                  Pack two skills:\n    skills-cli pack --skills pdf,xlsx")]
pub struct PackArgs {
    #[command(flatten)]
    pub source: RepoArgs,

    /// Comma-separated skill names (default: all)
    #[arg(long, short = 's', value_name = "NAMES")]
    pub skills: Option<String>,

    /// Directory for the zip files and manifest.json
    #[arg(long, short = 'o', default_value = "dist/desktop")]
    pub output: PathBuf,
}
