//! Git operations for fetching skill repositories
//!
//! This module handles:
//! - Resolving repository references into fetch plans ([`url`])
//! - Probing a remote's default branch ([`refs`])
//! - Materializing a repository into a scratch directory ([`fetch`])
//!
//! Everything the engine needs from version control goes through the [`Vcs`] trait so
//! the fetch logic can be exercised against a fake. The production implementation,
//! [`GitCli`], uses libgit2 for local repository setup and the `git` executable for
//! anything that talks to a remote. Authentication is therefore git's own:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Environment variables (GIT_SSH_COMMAND, etc.)

pub mod fetch;
pub mod process;
pub mod refs;
pub mod url;

pub use fetch::{FetchedTree, fetch};
pub use refs::detect_default_branch;
pub use url::RepoLocator;

use std::fs;
use std::path::Path;
use std::time::Duration;

use git2::Repository;

use crate::error::{Result, file_write_failed};

/// Upper bound on remote introspection before falling back to the default branch
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// The version-control verbs the fetcher depends on.
///
/// Clones and pulls are always shallow. In sparse mode the filter is written before
/// anything is pulled.
pub trait Vcs {
    /// Create an empty repository at `dir`.
    fn init(&self, dir: &Path) -> Result<()>;

    /// Register `url` as remote `name`.
    fn add_remote(&self, dir: &Path, name: &str, url: &str) -> Result<()>;

    /// Turn on sparse checkout for the repository at `dir`.
    fn enable_sparse_checkout(&self, dir: &Path) -> Result<()>;

    /// Restrict the checkout to `pattern`.
    fn set_sparse_filter(&self, dir: &Path, pattern: &str) -> Result<()>;

    /// Pull `branch` from `remote` at depth one.
    fn pull_shallow(&self, dir: &Path, remote: &str, branch: &str) -> Result<()>;

    /// Clone `branch` of `url` at depth one into `dest`.
    fn clone_shallow(&self, url: &str, branch: &str, dest: &Path) -> Result<()>;

    /// Abbreviated hash of HEAD, if there is one.
    fn short_head(&self, dir: &Path) -> Option<String>;

    /// Branch the remote HEAD points at, or `None` if the remote cannot tell us.
    ///
    /// Only an interrupt is reported as an error.
    fn remote_head_branch(&self, url: &str) -> Result<Option<String>>;
}

/// [`Vcs`] backed by libgit2 and the `git` executable.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl Vcs for GitCli {
    fn init(&self, dir: &Path) -> Result<()> {
        Repository::init(dir)?;
        Ok(())
    }

    fn add_remote(&self, dir: &Path, name: &str, url: &str) -> Result<()> {
        let repo = Repository::open(dir)?;
        repo.remote(name, url)?;
        Ok(())
    }

    fn enable_sparse_checkout(&self, dir: &Path) -> Result<()> {
        let repo = Repository::open(dir)?;
        repo.config()?.set_bool("core.sparseCheckout", true)?;
        Ok(())
    }

    fn set_sparse_filter(&self, dir: &Path, pattern: &str) -> Result<()> {
        let info_dir = dir.join(".git").join("info");
        fs::create_dir_all(&info_dir).map_err(|e| file_write_failed(&info_dir, e))?;

        let filter = info_dir.join("sparse-checkout");
        fs::write(&filter, format!("{pattern}\n")).map_err(|e| file_write_failed(&filter, e))
    }

    fn pull_shallow(&self, dir: &Path, remote: &str, branch: &str) -> Result<()> {
        process::run_git(&["pull", remote, branch, "--depth=1"], Some(dir))?;
        Ok(())
    }

    fn clone_shallow(&self, url: &str, branch: &str, dest: &Path) -> Result<()> {
        let dest = dest.to_string_lossy();
        process::run_git(
            &["clone", "--depth=1", "--branch", branch, url, dest.as_ref()],
            None,
        )?;
        Ok(())
    }

    fn short_head(&self, dir: &Path) -> Option<String> {
        let repo = Repository::open(dir).ok()?;
        let commit = repo.head().ok()?.peel_to_commit().ok()?;
        let short = commit.as_object().short_id().ok()?;
        short.as_str().map(ToString::to_string)
    }

    fn remote_head_branch(&self, url: &str) -> Result<Option<String>> {
        let stdout =
            process::run_git_with_timeout(&["ls-remote", "--symref", url, "HEAD"], None, PROBE_TIMEOUT)?;
        Ok(stdout.as_deref().and_then(refs::parse_symref_output))
    }
}
