//! Snapshots of installed skills taken before they are overwritten

use std::path::{Path, PathBuf};

use crate::common::fs::{CopyOptions, copy_dir_recursive, remove_dir_all};
use crate::common::paths::BACKUP_DIR;
use crate::error::{Result, file_write_failed, io_error};

/// Copy `skill_dir` to `<parent>/.backup/<name>_<YYYYmmdd_HHMMSS>` and return the copy.
pub fn backup_skill(skill_dir: &Path) -> Result<PathBuf> {
    let parent = skill_dir
        .parent()
        .ok_or_else(|| io_error(format!("No parent directory for {}", skill_dir.display())))?;
    let name = skill_dir
        .file_name()
        .ok_or_else(|| io_error(format!("No directory name for {}", skill_dir.display())))?
        .to_string_lossy();

    let backup_root = parent.join(BACKUP_DIR);
    std::fs::create_dir_all(&backup_root).map_err(|e| file_write_failed(&backup_root, e))?;

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = unique_path(&backup_root, &format!("{name}_{stamp}"));

    if let Err(err) = copy_dir_recursive(skill_dir, &backup_path, &CopyOptions::default()) {
        // Leave no half-written snapshot behind
        let _ = remove_dir_all(&backup_path);
        return Err(err);
    }

    Ok(backup_path)
}

/// `dir/stem`, or `dir/stem_1`, `dir/stem_2`, ... when taken.
fn unique_path(dir: &Path, stem: &str) -> PathBuf {
    let first = dir.join(stem);
    if !first.exists() {
        return first;
    }
    (1..)
        .map(|n| dir.join(format!("{stem}_{n}")))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_backup_copies_into_reserved_dir() {
        let temp = TempDir::new().unwrap();
        let skill = temp.path().join("pdf");
        fs::create_dir_all(&skill).unwrap();
        fs::write(skill.join("SKILL.md"), "old").unwrap();

        let backup = backup_skill(&skill).unwrap();

        assert_eq!(backup.parent(), Some(temp.path().join(BACKUP_DIR).as_path()));
        let name = backup.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("pdf_"), "{name}");
        assert_eq!(fs::read_to_string(backup.join("SKILL.md")).unwrap(), "old");
        assert!(skill.join("SKILL.md").exists());
    }

    #[test]
    fn test_backups_in_same_second_do_not_collide() {
        let temp = TempDir::new().unwrap();
        let skill = temp.path().join("pdf");
        fs::create_dir_all(&skill).unwrap();
        fs::write(skill.join("SKILL.md"), "x").unwrap();

        let first = backup_skill(&skill).unwrap();
        let second = backup_skill(&skill).unwrap();
        assert_ne!(first, second);
        assert!(first.is_dir() && second.is_dir());
    }

    #[test]
    fn test_backup_fails_when_reserved_dir_is_a_file() {
        let temp = TempDir::new().unwrap();
        let skill = temp.path().join("pdf");
        fs::create_dir_all(&skill).unwrap();
        fs::write(temp.path().join(BACKUP_DIR), "not a directory").unwrap();

        assert!(backup_skill(&skill).is_err());
    }

    #[test]
    fn test_unique_path() {
        let temp = TempDir::new().unwrap();
        assert_eq!(unique_path(temp.path(), "a"), temp.path().join("a"));
        fs::create_dir(temp.path().join("a")).unwrap();
        fs::create_dir(temp.path().join("a_1")).unwrap();
        assert_eq!(unique_path(temp.path(), "a"), temp.path().join("a_2"));
    }
}
