//! Safe temporary directory base so scratch checkouts are never created under the current
//! working directory (e.g. when TMPDIR=tmp or TMPDIR=./tmp).

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::{Result, io_error};

/// Returns a directory path suitable for creating temporary directories.
/// Never returns a relative path, so a relative TMPDIR cannot place a clone inside the
/// directory the user is installing into.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Create a fresh scratch directory that is removed when the returned guard is dropped.
pub fn scratch_dir() -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix("skills-cli-")
        .tempdir_in(temp_dir_base())
        .map_err(|e| io_error(format!("Failed to create temp dir: {e}")))
}
