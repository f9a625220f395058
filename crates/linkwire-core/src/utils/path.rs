//! Path utilities for absolutizing build-tree paths.
//!
//! Resolution is purely lexical: paths are joined onto a base directory and
//! `.`/`..` components are folded without touching the filesystem. The inputs
//! do not have to exist, and symlinks are never followed.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving . and .. components lexically
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {
                // Skip current directory
            },
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                },
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {
                    // ".." at the root stays at the root
                },
                _ => {
                    // Leading ".." in a relative path is kept as-is
                    components.push(component);
                },
            },
            other => {
                components.push(other);
            },
        }
    }

    components.iter().collect()
}

/// Resolve a path to absolute form against `base`, without filesystem access
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}
