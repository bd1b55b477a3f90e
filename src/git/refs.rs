//! Default branch detection
//!
//! Asks the remote which branch its HEAD points at (`git ls-remote --symref`) without
//! cloning. Any failure falls back to [`DEFAULT_BRANCH`].

use super::Vcs;
use crate::error::Result;

/// Branch assumed when nothing else is known
pub const DEFAULT_BRANCH: &str = "main";

/// Extract the branch from `ls-remote --symref <url> HEAD` output.
///
/// The interesting line looks like `ref: refs/heads/trunk\tHEAD`.
pub fn parse_symref_output(stdout: &str) -> Option<String> {
    stdout.lines().find_map(|line| {
        line.strip_prefix("ref: refs/heads/")
            .and_then(|rest| rest.split_whitespace().next())
            .map(ToString::to_string)
    })
}

/// The remote's default branch, or `main` when the remote cannot be asked.
///
/// Only an interrupt is propagated.
pub fn detect_default_branch(vcs: &dyn Vcs, clone_url: &str) -> Result<String> {
    Ok(vcs
        .remote_head_branch(clone_url)?
        .unwrap_or_else(|| DEFAULT_BRANCH.to_string()))
}
