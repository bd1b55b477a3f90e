//! Finding skills inside an unknown repository layout
//!
//! Stages, each tried only when the previous one found nothing:
//! 1. Immediate children of the root
//! 2. Conventional collection directories ([`COMMON_SKILL_DIRS`])
//! 3. A search for `SKILL.md` one to three levels down, stopping at the first level
//!    with any hit. If every hit shares one grandparent, that directory becomes the
//!    collection root and is rescanned; otherwise each hit is its own skill and the
//!    root stays where it was.
//!
//! Finding nothing is a normal result.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{SKILL_FILE, Skill, sort_skills};

/// Collection directories tried when the root itself holds no skills, in order.
pub const COMMON_SKILL_DIRS: &[&str] = &[
    "skills",
    "claude-skills",
    ".claude/skills",
    "claude/skills",
    "src/skills",
];

/// Deepest directory level (below the root) searched for a skill directory
const MAX_SEARCH_DEPTH: usize = 3;

/// Outcome of [`locate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// Directory whose children are the skills (the input root when scattered)
    pub root: PathBuf,
    pub skills: Vec<Skill>,
    /// Skills were found under more than one parent directory
    pub scattered: bool,
}

impl Located {
    fn at(root: PathBuf, skills: Vec<Skill>) -> Self {
        Self {
            root,
            skills,
            scattered: false,
        }
    }
}

/// Skills that are immediate children of `dir`, sorted. A missing `dir` has none.
pub fn scan_children(dir: &Path) -> Vec<Skill> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut skills: Vec<Skill> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .filter_map(|p| Skill::from_dir(&p))
        .collect();
    sort_skills(&mut skills);
    skills
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Marker files exactly `depth` directories below `root`, skipping hidden directories.
fn markers_at_depth(root: &Path, depth: usize) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .max_depth(depth + 1)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.depth() == depth + 1)
        .filter(|e| e.file_type().is_file() && e.file_name() == SKILL_FILE)
        .map(DirEntry::into_path)
        .collect()
}

fn search(root: &Path) -> Option<Located> {
    let markers = (1..=MAX_SEARCH_DEPTH)
        .map(|depth| markers_at_depth(root, depth))
        .find(|found| !found.is_empty())?;

    let skill_dirs: Vec<&Path> = markers.iter().filter_map(|m| m.parent()).collect();
    let grandparents: BTreeSet<&Path> = skill_dirs.iter().filter_map(|d| d.parent()).collect();

    if grandparents.len() == 1 {
        let collection = grandparents.into_iter().next()?;
        let skills = scan_children(collection);
        return (!skills.is_empty()).then(|| Located::at(collection.to_path_buf(), skills));
    }

    let mut skills: Vec<Skill> = skill_dirs.into_iter().filter_map(Skill::from_dir).collect();
    if skills.is_empty() {
        return None;
    }
    sort_skills(&mut skills);
    Some(Located {
        root: root.to_path_buf(),
        skills,
        scattered: true,
    })
}

/// Find the skills in the tree at `root`.
pub fn locate(root: &Path) -> Located {
    let skills = scan_children(root);
    if !skills.is_empty() {
        return Located::at(root.to_path_buf(), skills);
    }

    for dir in COMMON_SKILL_DIRS {
        let candidate = root.join(dir);
        if !candidate.is_dir() {
            continue;
        }
        let skills = scan_children(&candidate);
        if !skills.is_empty() {
            return Located::at(candidate, skills);
        }
    }

    search(root).unwrap_or_else(|| Located::at(root.to_path_buf(), Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_skill(dir: &Path, name: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join(SKILL_FILE),
            format!("---\nname: {name}\ndescription: Test\n---\nContent"),
        )
        .unwrap();
    }

    fn folders(located: &Located) -> Vec<&str> {
        located
            .skills
            .iter()
            .map(|s| s.folder_name.as_str())
            .collect()
    }

    #[test]
    fn test_scan_children_finds_skills() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join("pdf"), "PDF Tool");
        write_skill(&temp.path().join("xlsx"), "Excel Tool");

        let skills = scan_children(temp.path());
        let names: Vec<&str> = skills.iter().map(Skill::display_name).collect();
        assert_eq!(names, vec!["Excel Tool", "PDF Tool"]);
    }

    #[test]
    fn test_scan_children_ignores_files_and_plain_dirs() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "# README").unwrap();
        fs::create_dir_all(temp.path().join("not-a-skill")).unwrap();
        fs::write(temp.path().join("not-a-skill/README.md"), "# Not").unwrap();

        assert!(scan_children(temp.path()).is_empty());
    }

    #[test]
    fn test_scan_children_nonexistent_directory() {
        assert!(scan_children(Path::new("/nonexistent/path/for/skills")).is_empty());
    }

    #[test]
    fn test_locate_empty_tree() {
        let temp = TempDir::new().unwrap();
        let located = locate(temp.path());
        assert_eq!(located.root, temp.path());
        assert!(located.skills.is_empty());
        assert!(!located.scattered);
    }

    #[test]
    fn test_locate_in_root() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join("my-skill"), "My Skill");

        let located = locate(temp.path());
        assert_eq!(located.root, temp.path());
        assert_eq!(folders(&located), vec!["my-skill"]);
    }

    #[test]
    fn test_locate_in_common_subdir() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join("skills/pdf"), "PDF");

        let located = locate(temp.path());
        assert_eq!(located.root, temp.path().join("skills"));
        assert_eq!(folders(&located), vec!["pdf"]);
    }

    #[test]
    fn test_locate_each_common_subdir() {
        for common in COMMON_SKILL_DIRS {
            let temp = TempDir::new().unwrap();
            write_skill(&temp.path().join(common).join("test-skill"), "Test");

            let located = locate(temp.path());
            assert_eq!(located.root, temp.path().join(common), "{common}");
            assert_eq!(folders(&located), vec!["test-skill"]);
        }
    }

    #[test]
    fn test_root_beats_common_subdir() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join("top"), "Top");
        write_skill(&temp.path().join("skills/inner"), "Inner");

        let located = locate(temp.path());
        assert_eq!(located.root, temp.path());
        assert_eq!(folders(&located), vec!["top"]);
    }

    #[test]
    fn test_earlier_common_subdir_wins() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join("src/skills/late"), "Late");
        write_skill(&temp.path().join("claude-skills/early"), "Early");

        let located = locate(temp.path());
        assert_eq!(located.root, temp.path().join("claude-skills"));
    }

    #[test]
    fn test_deep_search() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join("packages/tools/my-skill"), "Deep Skill");

        let located = locate(temp.path());
        assert_eq!(located.root, temp.path().join("packages/tools"));
        assert_eq!(located.skills[0].display_name(), "Deep Skill");
    }

    #[test]
    fn test_search_single_grandparent_collapses_to_collection() {
        let temp = TempDir::new().unwrap();
        let collection = temp.path().join("packages/agent-skills");
        write_skill(&collection.join("a"), "A");
        write_skill(&collection.join("b"), "B");
        write_skill(&collection.join("c"), "C");

        let located = locate(temp.path());
        assert_eq!(located.root, collection);
        assert_eq!(folders(&located), vec!["a", "b", "c"]);
        assert!(!located.scattered);
    }

    #[test]
    fn test_search_multiple_grandparents_keeps_input_root() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join("team-a/tools/a"), "A");
        write_skill(&temp.path().join("team-a/tools/b"), "B");
        write_skill(&temp.path().join("team-b/tools/c"), "C");

        let located = locate(temp.path());
        assert_eq!(located.root, temp.path());
        assert_eq!(folders(&located), vec!["a", "b", "c"]);
        assert!(located.scattered);
        assert_eq!(located.skills[2].path, temp.path().join("team-b/tools/c"));
    }

    #[test]
    fn test_search_stops_at_shallowest_level() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join("pkg/shallow"), "Shallow");
        write_skill(&temp.path().join("other/deeper/deep"), "Deep");

        let located = locate(temp.path());
        assert_eq!(located.root, temp.path().join("pkg"));
        assert_eq!(folders(&located), vec!["shallow"]);
    }

    #[test]
    fn test_search_gives_up_below_three_levels() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join("a/b/c/d/too-deep"), "Too Deep");

        assert!(locate(temp.path()).skills.is_empty());
    }

    #[test]
    fn test_search_skips_hidden_directories() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join(".git/hooks/x"), "Hidden");

        assert!(locate(temp.path()).skills.is_empty());
    }

    // Bundle-in-bundle has no defined policy; this pins what happens today: the outer
    // skill is found and the inner one is just part of its payload.
    #[test]
    fn test_nested_skill_travels_with_outer_skill() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join("outer"), "Outer");
        write_skill(&temp.path().join("outer/inner"), "Inner");

        let located = locate(temp.path());
        assert_eq!(folders(&located), vec!["outer"]);
        assert!(located.skills[0].path.join("inner").join(SKILL_FILE).is_file());
    }

    #[test]
    fn test_nested_skills_found_by_search_are_both_reported() {
        let temp = TempDir::new().unwrap();
        write_skill(&temp.path().join("lib/outer"), "Outer");
        write_skill(&temp.path().join("lib/outer/inner"), "Inner");

        // The shallower hit wins: `outer` alone, with `inner` as its payload
        let located = locate(temp.path());
        assert_eq!(located.root, temp.path().join("lib"));
        assert_eq!(folders(&located), vec!["outer"]);
    }
}
