//! Install directory conventions

use std::env;
use std::path::{Path, PathBuf};

use crate::common::fs::resolve_path;
use crate::error::{Result, SkillsError, io_error};

/// Directory that holds skills, relative to the home directory or the project
const SKILLS_SUBDIR: &[&str] = &[".claude", "skills"];

/// Reserved subdirectory (inside a skills directory) holding backups
pub const BACKUP_DIR: &str = ".backup";

/// Where skills are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `~/.claude/skills`
    Personal,
    /// `./.claude/skills`
    Project,
}

impl Scope {
    pub fn label(self) -> &'static str {
        match self {
            Scope::Personal => "personal",
            Scope::Project => "project",
        }
    }

    /// The skills directory for this scope.
    pub fn skills_dir(self) -> Result<PathBuf> {
        let base = match self {
            Scope::Personal => dirs::home_dir().ok_or(SkillsError::HomeDirectoryUnavailable)?,
            Scope::Project => env::current_dir()
                .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?,
        };
        Ok(skills_dir_under(&base))
    }
}

/// `<base>/.claude/skills`
pub fn skills_dir_under(base: &Path) -> PathBuf {
    SKILLS_SUBDIR.iter().fold(base.to_path_buf(), |p, c| p.join(c))
}

/// The directory a command operates on: `--target` wins, then `--project`, then the
/// personal directory.
pub fn target_dir(target: Option<&Path>, project: bool) -> Result<PathBuf> {
    match target {
        Some(dir) => Ok(dir.to_path_buf()),
        None if project => Scope::Project.skills_dir(),
        None => Scope::Personal.skills_dir(),
    }
}

/// Drop roots that resolve to a directory already listed, keeping the first label.
///
/// Running from `$HOME` makes the personal and project directories the same path.
pub fn distinct_roots<T>(roots: Vec<(T, PathBuf)>) -> Vec<(T, PathBuf)> {
    let mut seen: Vec<PathBuf> = Vec::new();
    roots
        .into_iter()
        .filter(|(_, dir)| {
            let resolved = resolve_path(dir);
            if seen.contains(&resolved) {
                return false;
            }
            seen.push(resolved);
            true
        })
        .collect()
}
