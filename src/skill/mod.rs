//! Skill bundles
//!
//! A skill is a directory holding a `SKILL.md` marker file plus whatever payload it
//! needs. This module provides the descriptor type, the marker parser
//! ([`frontmatter`]), the search for skill directories inside an arbitrary tree
//! ([`locate`]) and the structural checks behind `validate` ([`validate`]).

pub mod frontmatter;
pub mod locate;
pub mod validate;

pub use locate::{Located, locate, scan_children};

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the marker file that makes a directory a skill
pub const SKILL_FILE: &str = "SKILL.md";

/// A skill directory found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    /// Absolute path of the skill directory
    pub path: PathBuf,
    /// Last component of `path`; the directory name used when installing
    pub folder_name: String,
    /// `name` from the marker header
    pub name: Option<String>,
    /// `description` from the marker header
    pub description: Option<String>,
}

impl Skill {
    /// Describe `dir` if it directly contains a `SKILL.md` file.
    ///
    /// An unreadable marker still qualifies the directory; its fields are left unset.
    pub fn from_dir(dir: &Path) -> Option<Self> {
        let marker = dir.join(SKILL_FILE);
        if !marker.is_file() {
            return None;
        }

        let folder_name = dir.file_name()?.to_string_lossy().into_owned();
        let header = fs::read_to_string(&marker)
            .map(|content| frontmatter::parse(&content))
            .unwrap_or_default();

        Some(Self {
            path: dir.to_path_buf(),
            folder_name,
            name: header.name,
            description: header.description,
        })
    }

    /// `name` from the header, falling back to the folder name
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.folder_name)
    }

    /// Case-insensitive match against the folder name or the display name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        !query.is_empty()
            && (self.folder_name.to_lowercase() == query
                || self
                    .name
                    .as_ref()
                    .is_some_and(|n| n.to_lowercase() == query))
    }

    /// Ordering used for every skill list: display name, then path.
    pub fn listing_order(a: &Self, b: &Self) -> Ordering {
        a.display_name()
            .cmp(b.display_name())
            .then_with(|| a.path.cmp(&b.path))
    }
}

/// Sort `skills` into listing order.
pub fn sort_skills(skills: &mut [Skill]) {
    skills.sort_by(Skill::listing_order);
}
