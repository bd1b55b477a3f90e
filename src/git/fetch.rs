//! Materializing a repository into a scratch directory
//!
//! Without a subdirectory the branch is cloned shallowly. With one, an empty repository
//! is set up with a sparse-checkout filter of `<subdir>/*` before a shallow pull, so
//! only that part of a large repository is downloaded.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::{RepoLocator, Vcs, detect_default_branch};
use crate::error::Result;
use crate::temp;

const REMOTE_NAME: &str = "origin";

/// A checked-out tree owned by one command invocation.
///
/// When temporary, the scratch directory is removed when this value is dropped, which
/// also happens while an error or an interrupt unwinds.
#[derive(Debug)]
pub struct FetchedTree {
    scratch: Option<TempDir>,
    repo_dir: PathBuf,
    root: PathBuf,
}

impl FetchedTree {
    /// Use an existing local directory in place. Nothing is removed on drop.
    pub fn local(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            scratch: None,
            repo_dir: path.clone(),
            root: path,
        }
    }

    /// Directory to search for skills
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Top of the checkout (the repository itself)
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    pub fn is_temporary(&self) -> bool {
        self.scratch.is_some()
    }

    /// Short hash of the checked-out commit, if it can be read.
    pub fn commit(&self, vcs: &dyn Vcs) -> Option<String> {
        vcs.short_head(&self.repo_dir)
    }
}

/// Pin the branch to fetch: an explicit override wins, otherwise the remote is asked
/// when the reference itself gave no hint.
pub fn resolve_branch(vcs: &dyn Vcs, locator: RepoLocator, branch: Option<&str>) -> Result<RepoLocator> {
    if let Some(branch) = branch {
        return Ok(locator.with_branch(branch));
    }
    if locator.needs_branch_probe() {
        let detected = detect_default_branch(vcs, &locator.clone_url)?;
        return Ok(locator.with_branch(detected));
    }
    Ok(locator)
}

/// Check `locator` out into `dest` and return the directory to search.
pub fn fetch_into(vcs: &dyn Vcs, locator: &RepoLocator, dest: &Path) -> Result<PathBuf> {
    let branch = locator.branch();

    match &locator.subdir {
        None => {
            vcs.clone_shallow(&locator.clone_url, branch, dest)?;
            Ok(dest.to_path_buf())
        }
        Some(subdir) => {
            vcs.init(dest)?;
            vcs.add_remote(dest, REMOTE_NAME, &locator.clone_url)?;
            vcs.enable_sparse_checkout(dest)?;
            vcs.set_sparse_filter(dest, &format!("{subdir}/*"))?;
            vcs.pull_shallow(dest, REMOTE_NAME, branch)?;
            Ok(dest.join(subdir))
        }
    }
}

/// Check `locator` out into a fresh scratch directory.
pub fn fetch(vcs: &dyn Vcs, locator: &RepoLocator) -> Result<FetchedTree> {
    let scratch = temp::scratch_dir()?;
    let repo_dir = scratch.path().join("repo");

    // On error `scratch` is dropped here and the partial checkout goes with it
    let root = fetch_into(vcs, locator, &repo_dir)?;

    Ok(FetchedTree {
        scratch: Some(scratch),
        repo_dir,
        root,
    })
}
