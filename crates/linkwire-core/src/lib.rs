//! # linkwire-core
//!
//! Core types and filesystem primitives shared by the linkwire build tooling.
//!
//! This crate provides:
//! - LinkwireError enum for unified error handling
//! - Lexical path absolutization helpers
//! - The ensure-directory and symlink primitives behind the CLI
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `error`: Error types and result aliases
//! - `link`: Directory and symlink operations
//! - `utils`: Path helpers

pub mod error;
pub mod link;
pub mod utils;

// Re-export commonly used types
pub use error::{LinkwireError, LinkwireResult};
pub use link::{ensure_dir, symlink, DirStatus};
