//! Structural checks for a skill directory

use std::fs;
use std::path::Path;

use super::SKILL_FILE;
use super::frontmatter::{self, HeaderSplit};

const REQUIRED_FIELDS: &[&str] = &["name", "description"];
const MAX_NAME_LEN: usize = 50;
const MAX_DESCRIPTION_LEN: usize = 500;

/// Problems with the skill at `skill_dir`; empty when it is well-formed.
pub fn validate_skill(skill_dir: &Path) -> Vec<String> {
    let marker = skill_dir.join(SKILL_FILE);
    if !marker.is_file() {
        return vec![format!("Missing {SKILL_FILE} file")];
    }

    let content = match fs::read_to_string(&marker) {
        Ok(content) => content,
        Err(e) => return vec![format!("Cannot read {SKILL_FILE}: {e}")],
    };

    let (header, body) = match frontmatter::split(&content) {
        HeaderSplit::Missing => {
            return vec!["Missing YAML frontmatter (should start with ---)".to_string()];
        }
        HeaderSplit::Unclosed => {
            return vec!["Invalid YAML frontmatter (missing closing ---)".to_string()];
        }
        HeaderSplit::Present { header, body } => (header, body),
    };

    let fields = frontmatter::pairs(&header);
    let field = |key: &str| {
        fields
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
            .filter(|v| !v.is_empty())
    };

    let mut issues: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|key| field(**key).is_none())
        .map(|key| format!("Missing required field: {key}"))
        .collect();

    if body.trim().is_empty() {
        issues.push("Empty skill body (no instructions after frontmatter)".to_string());
    }
    if field("name").is_some_and(|n| n.chars().count() > MAX_NAME_LEN) {
        issues.push(format!("Name is too long (>{MAX_NAME_LEN} characters)"));
    }
    if field("description").is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LEN) {
        issues.push(format!(
            "Description is too long (>{MAX_DESCRIPTION_LEN} characters)"
        ));
    }

    issues
}
