//! File system errors

use std::path::Path;

use super::SkillsError;

/// Creates a read failure for `path`
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> SkillsError {
    SkillsError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a write failure for `path`
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> SkillsError {
    SkillsError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a copy failure between two paths
pub fn copy_failed(from: &Path, to: &Path, reason: impl ToString) -> SkillsError {
    SkillsError::CopyFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SkillsError {
    SkillsError::IoError {
        message: message.into(),
    }
}
