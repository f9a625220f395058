//! Linker implementation for directory and symlink creation

use crate::error::{LinkwireError, LinkwireResult};
use std::fs;
use std::os::unix::fs as unix_fs;
use std::path::{Path, PathBuf};

/// Outcome of the ensure-directory step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExisted,
}

/// Ensure a directory exists at `path`, creating missing parent segments.
///
/// An existing entry of any kind (directory, file, symlink, even a dangling
/// one) counts as present and is left untouched.
pub fn ensure_dir(path: &Path) -> LinkwireResult<DirStatus> {
    if fs::symlink_metadata(path).is_ok() {
        tracing::debug!("entry already present at {}", path.display());
        return Ok(DirStatus::AlreadyExisted);
    }

    fs::create_dir_all(path).map_err(|e| {
        LinkwireError::io(
            format!("Failed to create directory: {}", path.display()),
            e,
        )
    })?;
    tracing::debug!("created directory {}", path.display());

    Ok(DirStatus::Created)
}

/// Create a symbolic link to `source_path` at `link_path`.
///
/// Follows the `ln -s` placement rule: when `link_path` is an existing
/// directory the link is created inside it under the source's file name.
/// A pre-existing entry at the final link location is never removed, so the
/// call fails with `AlreadyExists` in that case. Returns the path the link
/// was actually created at.
pub fn symlink(source_path: &Path, link_path: &Path) -> LinkwireResult<PathBuf> {
    let link_at = if link_path.is_dir() {
        match source_path.file_name() {
            Some(name) => link_path.join(name),
            None => link_path.to_path_buf(),
        }
    } else {
        link_path.to_path_buf()
    };

    unix_fs::symlink(source_path, &link_at).map_err(|e| {
        LinkwireError::io(
            format!(
                "Failed to create symlink: {} -> {}",
                link_at.display(),
                source_path.display()
            ),
            e,
        )
    })?;
    tracing::debug!("linked {} -> {}", link_at.display(), source_path.display());

    Ok(link_at)
}
