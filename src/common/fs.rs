//! Common file system operations with unified error handling

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs::copy_failed};

#[derive(Default, Clone)]
pub struct CopyOptions {
    pub exclude: Vec<String>,
}

impl CopyOptions {
    /// Skip version-control metadata; a skill never carries its repository's `.git`.
    pub fn exclude_git() -> Self {
        Self {
            exclude: vec![".git".to_string()],
        }
    }

    fn excludes(&self, name: &std::ffi::OsStr) -> bool {
        self.exclude
            .iter()
            .any(|excluded| name.to_str() == Some(excluded.as_str()))
    }
}

/// Copy a directory recursively with options
///
/// Symlinks to files are copied as files. Symlinks to directories are skipped, so a
/// link pointing back up the tree cannot make the copy recurse forever.
pub fn copy_dir_recursive(src: &Path, dst: &Path, options: &CopyOptions) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| copy_failed(src, dst, e))?;

    let entries = fs::read_dir(src).map_err(|e| copy_failed(src, dst, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| copy_failed(src, dst, e))?;
        let entry_path = entry.path();
        let file_name = entry.file_name();

        if options.excludes(&file_name) {
            continue;
        }

        let dst_path = dst.join(&file_name);
        let file_type = entry.file_type().map_err(|e| copy_failed(&entry_path, &dst_path, e))?;

        if file_type.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path, options)?;
        } else if file_type.is_symlink() && entry_path.is_dir() {
            continue;
        } else {
            fs::copy(&entry_path, &dst_path).map_err(|e| copy_failed(&entry_path, &dst_path, e))?;
        }
    }

    Ok(())
}

/// `path` with symlinks and `..` resolved, even when its tail does not exist yet.
///
/// The deepest existing ancestor is canonicalized and the missing components are
/// appended to it. Falls back to `path` unchanged when no ancestor resolves.
pub fn resolve_path(path: &Path) -> PathBuf {
    let mut missing: Vec<OsString> = Vec::new();
    let mut current = path;
    loop {
        if let Ok(canonical) = fs::canonicalize(current) {
            return missing.iter().rev().fold(canonical, |p, c| p.join(c));
        }
        let (Some(parent), Some(name)) = (current.parent(), current.file_name()) else {
            return path.to_path_buf();
        };
        missing.push(name.to_os_string());
        current = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
    }
}

/// Whether `a` and `b` are the same directory or one lies inside the other.
pub fn paths_overlap(a: &Path, b: &Path) -> bool {
    let (a, b) = (resolve_path(a), resolve_path(b));
    a.starts_with(&b) || b.starts_with(&a)
}

/// Remove a directory tree, treating an already-missing directory as success.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(crate::error::file_write_failed(path, e)),
    }
}
