//! Git operation errors

use super::SkillsError;

/// Creates an error for a git invocation that exited unsuccessfully.
///
/// `stderr` is kept verbatim so the collaborator's diagnostic reaches the user.
pub fn command_failed(command: impl Into<String>, stderr: impl AsRef<str>) -> SkillsError {
    SkillsError::GitCommandFailed {
        command: command.into(),
        stderr: stderr.as_ref().trim().to_string(),
    }
}

/// Creates an error for a git executable that could not be started
pub fn unavailable(reason: impl ToString) -> SkillsError {
    SkillsError::GitUnavailable {
        reason: reason.to_string(),
    }
}
