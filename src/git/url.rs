//! Repository reference resolution
//!
//! Turns whatever the user pasted (a browser URL pointing into a tree, a clone URL, an
//! SCP-style SSH address, or anything else) into a [`RepoLocator`]. Resolution never
//! fails: unrecognized input is passed to git unchanged.
//!
//! Supported shapes, tried in this order:
//! - GitHub tree URL: `https://github.com/owner/repo/tree/branch[/subdir]`
//! - GitLab tree URL: `https://host/group[/subgroup...]/repo/-/tree/branch[/subdir]`
//! - Plain HTTP(S) URL: `https://host/owner/repo[.git]`
//! - SSH URL: `git@host:owner/repo[.git]`

use super::refs::DEFAULT_BRANCH;

const GIT_SUFFIX: &str = ".git";

/// Where to fetch a repository from and which part of it to check out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocator {
    /// The reference exactly as given
    pub raw_reference: String,
    /// URL handed to git
    pub clone_url: String,
    /// Branch pinned by the reference or by `--branch`
    pub branch: Option<String>,
    /// Repository-relative directory to restrict the checkout to
    pub subdir: Option<String>,
    /// `github`, `gitlab`, or the host name for other URLs
    pub host: Option<String>,
}

impl RepoLocator {
    /// Classify `reference`, first matching shape wins.
    pub fn resolve(reference: &str) -> Self {
        let reference = reference.trim();

        if let Some(locator) = parse_github_tree_url(reference) {
            return locator;
        }
        if let Some(locator) = parse_gitlab_tree_url(reference) {
            return locator;
        }
        if let Some(locator) = parse_http_url(reference) {
            return locator;
        }
        if let Some(locator) = parse_ssh_url(reference) {
            return locator;
        }

        Self::passthrough(reference)
    }

    fn passthrough(reference: &str) -> Self {
        Self {
            raw_reference: reference.to_string(),
            clone_url: reference.to_string(),
            branch: None,
            subdir: None,
            host: None,
        }
    }

    /// The branch to fetch, `main` unless something pinned it.
    pub fn branch(&self) -> &str {
        self.branch.as_deref().unwrap_or(DEFAULT_BRANCH)
    }

    /// Pin the branch, overriding whatever the reference carried.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Whether the remote should be asked for its default branch.
    ///
    /// Only when nothing pinned a branch and the user did not paste a tree URL.
    pub fn needs_branch_probe(&self) -> bool {
        self.branch.is_none() && !self.raw_reference.contains("/tree/")
    }
}

/// Split `branch[/subdir]`, dropping an empty subdir.
fn split_branch_and_subdir(rest: &str) -> Option<(String, Option<String>)> {
    let (branch, subdir) = match rest.split_once('/') {
        Some((branch, subdir)) => (branch, Some(subdir.trim_matches('/'))),
        None => (rest, None),
    };
    if branch.is_empty() {
        return None;
    }
    let subdir = subdir.filter(|s| !s.is_empty()).map(ToString::to_string);
    Some((branch.to_string(), subdir))
}

fn parse_github_tree_url(reference: &str) -> Option<RepoLocator> {
    let path = reference.strip_prefix("https://github.com/")?;
    let mut parts = path.splitn(4, '/');
    let owner = parts.next().filter(|s| !s.is_empty())?;
    let repo = parts.next().filter(|s| !s.is_empty())?;
    if parts.next()? != "tree" {
        return None;
    }
    let (branch, subdir) = split_branch_and_subdir(parts.next()?)?;

    Some(RepoLocator {
        raw_reference: reference.to_string(),
        clone_url: format!("https://github.com/{owner}/{repo}{GIT_SUFFIX}"),
        branch: Some(branch),
        subdir,
        host: Some("github".to_string()),
    })
}

fn parse_gitlab_tree_url(reference: &str) -> Option<RepoLocator> {
    let rest = reference.strip_prefix("https://")?;
    let (host, path) = rest.split_once('/')?;
    if host.is_empty() {
        return None;
    }
    let (repo_path, tree) = path.split_once("/-/tree/")?;

    // group/repo at minimum; nested subgroups are allowed
    let segments: Vec<&str> = repo_path.split('/').collect();
    if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    let (branch, subdir) = split_branch_and_subdir(tree)?;

    Some(RepoLocator {
        raw_reference: reference.to_string(),
        clone_url: format!("https://{host}/{repo_path}{GIT_SUFFIX}"),
        branch: Some(branch),
        subdir,
        host: Some("gitlab".to_string()),
    })
}

fn parse_http_url(reference: &str) -> Option<RepoLocator> {
    let (scheme, rest) = if let Some(rest) = reference.strip_prefix("https://") {
        ("https", rest)
    } else {
        ("http", reference.strip_prefix("http://")?)
    };

    let netloc_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let netloc = &rest[..netloc_end];
    let after_netloc = &rest[netloc_end..];
    let path_end = after_netloc.find(['?', '#']).unwrap_or(after_netloc.len());
    let path = after_netloc[..path_end].trim_end_matches('/');

    let clone_url = if path.ends_with(GIT_SUFFIX) {
        reference.to_string()
    } else {
        format!("{scheme}://{netloc}{path}{GIT_SUFFIX}")
    };

    Some(RepoLocator {
        raw_reference: reference.to_string(),
        clone_url,
        branch: None,
        subdir: None,
        host: Some(netloc.to_string()),
    })
}

fn parse_ssh_url(reference: &str) -> Option<RepoLocator> {
    if reference.contains("://") {
        return None;
    }
    let (user, rest) = reference.split_once('@')?;
    if user.is_empty() || user.contains(['/', ':']) {
        return None;
    }
    let (host, path) = rest.split_once(':')?;
    if host.is_empty() || host.contains('/') {
        return None;
    }
    let path = path.strip_suffix(GIT_SUFFIX).unwrap_or(path);
    if path.is_empty() {
        return None;
    }

    Some(RepoLocator {
        raw_reference: reference.to_string(),
        clone_url: format!("{user}@{host}:{path}{GIT_SUFFIX}"),
        branch: None,
        subdir: None,
        host: Some(host.to_string()),
    })
}
