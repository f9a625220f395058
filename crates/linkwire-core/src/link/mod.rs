//! Directory and symlink operations.
//!
//! This module provides the two filesystem primitives behind the CLI:
//! directory creation with missing parents, and native symlink creation
//! following the `ln -s` placement rule.

pub mod linker;

// Re-export main types
pub use linker::{ensure_dir, symlink, DirStatus};
