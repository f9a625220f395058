//! The link command: ensure the target directory, then create the symlink.
//!
//! Status lines printed here are consumed by humans reading build logs and
//! keep the wording the surrounding build system has always emitted.

use linkwire_core::error::LinkwireResult;
use linkwire_core::link::{ensure_dir, symlink, DirStatus};
use linkwire_core::utils::path::absolutize;
use std::path::PathBuf;
use tracing::debug;

use super::CommandContext;

/// Execute the link command
pub fn execute(
    target_path: PathBuf,
    source_path: PathBuf,
    ctx: &CommandContext,
) -> LinkwireResult<()> {
    let abs_target = absolutize(&target_path, &ctx.cwd);
    let abs_source = absolutize(&source_path, &ctx.cwd);

    match ensure_dir(&abs_target)? {
        DirStatus::Created => ctx.output.info("make folder OK"),
        DirStatus::AlreadyExisted => ctx.output.info("folder already existed"),
    }

    ctx.output.info(&format!("skia path is : {}", abs_target.display()));
    ctx.output.info(&format!("symlink path is: {}", abs_source.display()));

    let link_at = symlink(&abs_source, &abs_target)?;
    debug!("wired {} -> {}", link_at.display(), abs_source.display());

    Ok(())
}
