//! Command helper utilities
//!
//! The steps shared by commands that read a repository: resolve the reference,
//! fetch it (or use a local directory in place), locate skills and narrow them
//! down to the user's selection.

use std::path::Path;

use crate::common::string_utils::split_names;
use crate::error::{Result, SkillsError};
use crate::git::fetch::resolve_branch;
use crate::git::{FetchedTree, RepoLocator, Vcs, fetch};
use crate::skill::{Located, Skill, locate};
use crate::ui::Printer;
use crate::ui::progress::Spinner;
use crate::ui::select::{LineReader, interactive_select};

/// A repository reference and the tree it was checked out to.
#[derive(Debug)]
pub struct Source {
    pub locator: RepoLocator,
    pub tree: FetchedTree,
}

/// Resolve `reference` and materialize it.
///
/// An existing local directory is used in place without asking git anything.
pub fn open_source(
    vcs: &dyn Vcs,
    reference: &str,
    branch: Option<&str>,
    printer: &Printer,
) -> Result<Source> {
    let local = Path::new(reference);
    if local.is_dir() {
        printer.debug(format!("Using local directory {}", local.display()));
        let mut locator = RepoLocator::resolve(reference);
        if let Some(branch) = branch {
            locator = locator.with_branch(branch);
        }
        return Ok(Source {
            locator,
            tree: FetchedTree::local(local),
        });
    }

    let spinner = Spinner::start(format!("Resolving {reference}"));
    let locator = resolve_branch(vcs, RepoLocator::resolve(reference), branch)?;
    printer.debug(format!(
        "Host: {}, clone URL: {}, branch: {}, subdirectory: {}",
        locator.host.as_deref().unwrap_or("-"),
        locator.clone_url,
        locator.branch(),
        locator.subdir.as_deref().unwrap_or("-")
    ));

    spinner.set_message(format!("Fetching {} ({})", locator.clone_url, locator.branch()));
    let tree = fetch(vcs, &locator)?;
    drop(spinner);

    printer.debug(format!("Checked out to {}", tree.repo_dir().display()));
    Ok(Source { locator, tree })
}

/// Locate skills in `source`, reporting where they were found.
pub fn locate_skills(source: &Source, printer: &Printer) -> Located {
    let located = locate(source.tree.root());
    if located.scattered {
        printer.debug(format!(
            "Skills found in several directories under {}",
            located.root.display()
        ));
    } else if !located.skills.is_empty() {
        printer.debug(format!("Skills root: {}", located.root.display()));
    }
    located
}

/// Narrow `skills` to the comma-separated `names`, to all of them, or to what the
/// user picks interactively, in that order of precedence.
///
/// Names match folder or display name case-insensitively. Each skill appears at most
/// once. Naming only unknown skills is an error.
pub fn select_skills(
    skills: &[Skill],
    names: Option<&str>,
    all: bool,
    reader: &mut dyn LineReader,
    printer: &Printer,
) -> Result<Vec<Skill>> {
    if let Some(names) = names {
        let requested = split_names(names);
        let selected: Vec<Skill> = skills
            .iter()
            .filter(|s| requested.iter().any(|name| s.matches(name)))
            .cloned()
            .collect();

        if selected.is_empty() {
            return Err(SkillsError::NoMatchingSkills {
                requested: requested.join(", "),
                available: skills
                    .iter()
                    .map(|s| s.folder_name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        for name in requested.iter().filter(|n| !selected.iter().any(|s| s.matches(n))) {
            printer.warning(format!("Skill not found: {name}"));
        }
        return Ok(selected);
    }

    if all {
        return Ok(skills.to_vec());
    }

    Ok(interactive_select(skills, reader, printer))
}
