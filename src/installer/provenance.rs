//! Provenance sidecar for installed skills
//!
//! Every skill installed by this tool gets a `.skills-cli.json` file recording where it
//! came from. Skills copied in by hand have none.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, file_write_failed};
use crate::git::RepoLocator;

/// Sidecar file name inside an installed skill directory
pub const PROVENANCE_FILE: &str = ".skills-cli.json";

/// Value of `installer_tag` written by this tool
pub const INSTALLER_TAG: &str = "skills-cli";

/// Where an installed skill came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    /// Reference the user gave (`source_url` in older records)
    #[serde(alias = "source_url")]
    pub source_reference: Option<String>,
    pub clone_url: Option<String>,
    pub branch: Option<String>,
    /// Short commit hash, when it could be read
    pub commit: Option<String>,
    /// RFC 3339 timestamp
    pub installed_at: Option<String>,
    /// `installed_by` in older records
    #[serde(alias = "installed_by")]
    pub installer_tag: Option<String>,
}

impl ProvenanceRecord {
    /// A record for skills installed now from `locator` at `commit`.
    pub fn new(locator: &RepoLocator, commit: Option<String>) -> Self {
        Self {
            source_reference: Some(locator.raw_reference.clone()),
            clone_url: Some(locator.clone_url.clone()),
            branch: Some(locator.branch().to_string()),
            commit,
            installed_at: Some(chrono::Local::now().to_rfc3339()),
            installer_tag: Some(INSTALLER_TAG.to_string()),
        }
    }

    /// One-line `source (branch@commit)` summary
    pub fn summary(&self) -> String {
        let dash = "-";
        format!(
            "{} ({}@{})",
            self.source_reference.as_deref().unwrap_or(dash),
            self.branch.as_deref().unwrap_or(dash),
            self.commit.as_deref().unwrap_or(dash)
        )
    }
}

/// Write `record` into the skill directory `skill_dir`, replacing any previous one.
pub fn write(skill_dir: &Path, record: &ProvenanceRecord) -> Result<()> {
    let path = skill_dir.join(PROVENANCE_FILE);
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json).map_err(|e| file_write_failed(&path, e))
}

/// Read the record of `skill_dir`, if there is a readable one.
pub fn read(skill_dir: &Path) -> Option<ProvenanceRecord> {
    let content = fs::read_to_string(skill_dir.join(PROVENANCE_FILE)).ok()?;
    serde_json::from_str(&content).ok()
}
