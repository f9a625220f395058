//! Command implementations and shared context.
//!
//! The CLI has a single operation: ensure the target directory exists, then
//! symlink it to the source path. Commands receive a `CommandContext` holding
//! the working directory and the output handler.

use linkwire_core::error::{LinkwireError, LinkwireResult};
use std::path::PathBuf;

pub mod link;


use crate::output::OutputHandler;

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: PathBuf,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> LinkwireResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            LinkwireError::io("Failed to get current directory".to_string(), e)
        })?;

        let output = OutputHandler::new();

        Ok(Self { cwd, output })
    }
}
