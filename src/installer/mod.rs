//! Installing skills into a skills directory
//!
//! Each skill goes through the same decision:
//!
//! | destination | force | dry run | result                                   |
//! |-------------|-------|---------|------------------------------------------|
//! | missing     | any   | yes     | `WouldInstall`                           |
//! | missing     | any   | no      | copy, `Installed`                        |
//! | exists      | no    | any     | `Blocked`, nothing touched               |
//! | exists      | yes   | yes     | `WouldUpdate`                            |
//! | exists      | yes   | no      | optional backup, replace, `Updated`      |
//!
//! A failed backup is reported on the outcome and the update goes ahead. Dry runs
//! never touch the file system, not even to create the target directory. A skill
//! whose directory is, contains or lies inside its destination is refused before
//! anything is decided.

pub mod backup;
pub mod provenance;

pub use provenance::ProvenanceRecord;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::fs::{CopyOptions, copy_dir_recursive, paths_overlap, remove_dir_all};
use crate::error::{Result, SkillsError, file_write_failed};
use crate::skill::Skill;

/// What happened (or would happen) to one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    WouldInstall,
    WouldUpdate,
    Installed,
    Updated,
    Blocked,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Installed,
        Action::Updated,
        Action::WouldInstall,
        Action::WouldUpdate,
        Action::Blocked,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::WouldInstall => "would install",
            Action::WouldUpdate => "would update",
            Action::Installed => "installed",
            Action::Updated => "updated",
            Action::Blocked => "blocked",
        }
    }

    /// Whether the skill ended up (or would end up) in the target.
    pub fn is_success(self) -> bool {
        !matches!(self, Action::Blocked)
    }
}

/// Flags controlling [`install_skill`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Replace an existing destination
    pub force: bool,
    /// Snapshot an existing destination before replacing it
    pub backup: bool,
    /// Decide only; change nothing
    pub dry_run: bool,
}

/// Result of processing one skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Display name of the skill
    pub skill_name: String,
    pub action: Action,
    /// Human-readable detail
    pub message: String,
    /// Snapshot taken before an update
    pub backup_path: Option<PathBuf>,
    /// Non-fatal problems (a failed backup)
    pub warnings: Vec<String>,
}

impl Outcome {
    fn new(skill: &Skill, action: Action, message: impl Into<String>) -> Self {
        Self {
            skill_name: skill.display_name().to_string(),
            action,
            message: message.into(),
            backup_path: None,
            warnings: Vec::new(),
        }
    }
}

/// Fail when copying `skill` to `dest` would read from the directory being replaced.
pub fn ensure_separate(skill: &Skill, dest: &Path) -> Result<()> {
    if paths_overlap(&skill.path, dest) {
        return Err(SkillsError::SourceOverlapsDestination {
            source_dir: skill.path.display().to_string(),
            destination: dest.display().to_string(),
        });
    }
    Ok(())
}

/// Install `skill` into `target_dir/<folder_name>`.
///
/// Errors when the skill overlaps its destination, or when a copy or removal fails
/// partway through a real install.
pub fn install_skill(
    skill: &Skill,
    target_dir: &Path,
    options: InstallOptions,
    provenance: Option<&ProvenanceRecord>,
) -> Result<Outcome> {
    let dest = target_dir.join(&skill.folder_name);
    ensure_separate(skill, &dest)?;

    if !dest.exists() {
        if options.dry_run {
            let message = format!("would install to {}", dest.display());
            return Ok(Outcome::new(skill, Action::WouldInstall, message));
        }
        place(skill, target_dir, &dest, provenance)?;
        return Ok(Outcome::new(skill, Action::Installed, "installed"));
    }

    if !options.force {
        return Ok(Outcome::new(
            skill,
            Action::Blocked,
            "already exists (use --force to overwrite)",
        ));
    }

    if options.dry_run {
        return Ok(Outcome::new(
            skill,
            Action::WouldUpdate,
            "would overwrite existing skill",
        ));
    }

    let mut outcome = Outcome::new(skill, Action::Updated, "updated");
    if options.backup {
        match backup::backup_skill(&dest) {
            Ok(path) => outcome.backup_path = Some(path),
            Err(e) => outcome.warnings.push(format!("Backup failed, continuing: {e}")),
        }
    }

    remove_dir_all(&dest)?;
    place(skill, target_dir, &dest, provenance)?;
    Ok(outcome)
}

fn place(
    skill: &Skill,
    target_dir: &Path,
    dest: &Path,
    provenance: Option<&ProvenanceRecord>,
) -> Result<()> {
    fs::create_dir_all(target_dir).map_err(|e| file_write_failed(target_dir, e))?;
    copy_dir_recursive(&skill.path, dest, &CopyOptions::exclude_git())?;
    if let Some(record) = provenance {
        provenance::write(dest, record)?;
    }
    Ok(())
}

/// Counts per action across a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    counts: [usize; Action::ALL.len()],
}

impl Summary {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.record(outcome.action);
        }
        summary
    }

    pub fn record(&mut self, action: Action) {
        if let Some(i) = Action::ALL.iter().position(|a| *a == action) {
            self.counts[i] += 1;
        }
    }

    pub fn count(&self, action: Action) -> usize {
        Action::ALL
            .iter()
            .position(|a| *a == action)
            .map_or(0, |i| self.counts[i])
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Skills that were (or would be) placed
    pub fn succeeded(&self) -> usize {
        Action::ALL
            .iter()
            .filter(|a| a.is_success())
            .map(|a| self.count(*a))
            .sum()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Action::ALL
            .iter()
            .filter(|a| self.count(**a) > 0)
            .map(|a| format!("{} {}", self.count(*a), a.label()))
            .collect();
        if parts.is_empty() {
            write!(f, "nothing to do")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}
