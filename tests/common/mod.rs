//! Common test utilities for skills-cli integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use git2::{IndexAddOption, Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

#[allow(dead_code)]
pub const PDF_SKILL: &str = "---\nname: pdf\ndescription: Work with PDF files\n---\nUse pdfplumber.\n";
#[allow(dead_code)]
pub const XLSX_SKILL: &str = "---\nname: xlsx\ndescription: Work with spreadsheets\n---\nUse openpyxl.\n";

/// A sandbox with its own home directory, project directory and source repository
#[allow(dead_code)]
pub struct TestWorkspace {
    pub temp: TempDir,
    /// Stands in for `$HOME`
    pub home: PathBuf,
    /// Working directory for commands
    pub project: PathBuf,
    /// Skill repository sources
    pub repo: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        let project = temp.path().join("project");
        let repo = temp.path().join("repo");
        for dir in [&home, &project, &repo] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }
        Self {
            temp,
            home,
            project,
            repo,
        }
    }

    /// The binary, sandboxed to this workspace
    pub fn cmd(&self) -> Command {
        // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("skills-cli").expect("Failed to find binary");
        cmd.current_dir(&self.project)
            .env("HOME", &self.home)
            .env("NO_COLOR", "1")
            .env_remove("SKILLS_CLI_REPO")
            .env_remove("SKILLS_CLI_TARGET")
            .env_remove("SKILLS_CLI_DEBUG");
        cmd
    }

    /// Write `content` to `path` relative to the workspace root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.temp.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.temp.path().join(path)).expect("Failed to read file")
    }

    pub fn exists(&self, path: &str) -> bool {
        self.temp.path().join(path).exists()
    }

    /// Add a skill to the source repository under `dir`
    pub fn add_repo_skill(&self, dir: &str, content: &str) {
        self.write_file(&format!("repo/{dir}/SKILL.md"), content);
    }

    /// The source repository as a local `--repo` argument
    pub fn repo_arg(&self) -> String {
        self.repo.to_string_lossy().into_owned()
    }

    /// Commit the source repository on branch `main` and return its `file://` URL
    pub fn commit_repo(&self) -> String {
        commit_all(&self.repo, "main");
        format!("file://{}", self.repo.display())
    }
}

/// Commit everything under `dir` to `branch`, creating the repository if needed
#[allow(dead_code)]
pub fn commit_all(dir: &Path, branch: &str) {
    let repo = Repository::open(dir).unwrap_or_else(|_| {
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head(branch);
        Repository::init_opts(dir, &opts).expect("Failed to init repository")
    });

    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");

    let sig = Signature::now("Test", "test@example.com").expect("Failed to create signature");
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, "fixture", &tree, &parents)
        .expect("Failed to commit");
}
