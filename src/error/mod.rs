//! Error types and handling for skills-cli
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`git`]: VCS collaborator errors
//! - [`fs`]: File system errors

pub mod fs;
pub mod git;

pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use git::command_failed as git_command_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for skills-cli operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillsError {
    // Git errors
    #[error("Git command failed: {command}\n{stderr}")]
    #[diagnostic(
        code(skills::git::command_failed),
        help("Check that the repository URL and branch are correct and that you have access to it")
    )]
    GitCommandFailed { command: String, stderr: String },

    #[error("Could not run git: {reason}")]
    #[diagnostic(
        code(skills::git::unavailable),
        help("Install git and make sure it is on your PATH")
    )]
    GitUnavailable { reason: String },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(skills::git::operation_failed))]
    GitOperationFailed { message: String },

    // Selection errors
    #[error("No matching skills found for: {requested}")]
    #[diagnostic(
        code(skills::selection::no_match),
        help("Available skills: {available}")
    )]
    NoMatchingSkills {
        requested: String,
        available: String,
    },

    // Directory errors
    #[error("Could not determine home directory")]
    #[diagnostic(
        code(skills::fs::no_home),
        help("Use --project or --target to choose a skills directory explicitly")
    )]
    HomeDirectoryUnavailable,

    #[error("Source {source_dir} overlaps install destination {destination}")]
    #[diagnostic(
        code(skills::fs::source_overlaps_destination),
        help("Install a local directory into a different target, e.g. with --target")
    )]
    SourceOverlapsDestination {
        source_dir: String,
        destination: String,
    },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(skills::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(skills::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(skills::fs::copy_failed))]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(skills::fs::io_error))]
    IoError { message: String },

    // Packaging errors
    #[error("Failed to pack {path}: {reason}")]
    #[diagnostic(code(skills::pack::failed))]
    PackFailed { path: String, reason: String },

    // Reporting errors
    #[error("Found {count} validation issue(s)")]
    #[diagnostic(
        code(skills::validate::issues_found),
        help("Fix the reported SKILL.md problems and run validate again")
    )]
    ValidationFailed { count: usize },

    #[error("Doctor found {count} issue(s)")]
    #[diagnostic(code(skills::doctor::issues_found))]
    DoctorFoundIssues { count: usize },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(skills::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    #[error("Interrupted")]
    #[diagnostic(code(skills::interrupted))]
    Interrupted,
}

impl SkillsError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SkillsError::Interrupted => 130,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for SkillsError {
    fn from(err: std::io::Error) -> Self {
        SkillsError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SkillsError {
    fn from(err: serde_json::Error) -> Self {
        SkillsError::IoError {
            message: format!("invalid JSON: {err}"),
        }
    }
}

impl From<git2::Error> for SkillsError {
    fn from(err: git2::Error) -> Self {
        SkillsError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}

impl From<walkdir::Error> for SkillsError {
    fn from(err: walkdir::Error) -> Self {
        SkillsError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for SkillsError {
    fn from(err: zip::result::ZipError) -> Self {
        SkillsError::PackFailed {
            path: "archive".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SkillsError {
    fn from(err: inquire::InquireError) -> Self {
        SkillsError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillsError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_code() {
        let err = git_command_failed("git clone x", "fatal: repository not found");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("skills::git::command_failed".to_string())
        );
    }

    #[test]
    fn test_git_stderr_is_surfaced_verbatim() {
        let err = git_command_failed(
            "git pull origin main --depth=1",
            "fatal: couldn't find remote ref main",
        );
        assert!(
            err.to_string()
                .contains("fatal: couldn't find remote ref main")
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SkillsError = io_err.into();
        assert!(matches!(err, SkillsError::IoError { .. }));
    }

    #[test]
    fn test_git2_error_conversion() {
        let git_err = git2::Error::from_str("bad object");
        let err: SkillsError = git_err.into();
        assert!(matches!(err, SkillsError::GitOperationFailed { .. }));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SkillsError::Interrupted.exit_code(), 130);
        assert_eq!(io_error("boom").exit_code(), 1);
    }

    test_error_contains!(
        test_no_matching_skills,
        SkillsError::NoMatchingSkills {
            requested: "pdf".to_string(),
            available: "docx, xlsx".to_string(),
        },
        "No matching skills found for: pdf"
    );

    test_error_contains!(
        test_file_write_failed,
        file_write_failed("/tmp/x/.skills-cli.json", "disk full"),
        "Failed to write file",
        "disk full"
    );

    test_error_contains!(
        test_validation_failed,
        SkillsError::ValidationFailed { count: 3 },
        "3 validation issue"
    );
}
