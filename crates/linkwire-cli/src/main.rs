//! # linkwire-cli
//!
//! Build-support CLI that wires a third-party include directory into a build
//! tree: it ensures the target directory exists, then creates a symbolic link
//! from it to the source path.
//!
//! This is the entry point for the `linkwire` binary. It handles argument
//! parsing, sets up logging, and dispatches to the link command.

use clap::Parser;
use linkwire_core::error::{LinkwireError, LinkwireResult};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;

mod commands;
mod output;

use commands::CommandContext;
use output::OutputHandler;

/// Fixed wording the calling build system sees on a bad invocation
const ARGV_COUNT_ERROR: &str = "argv count error, return!";

/// Wire an include directory into the build tree via a symbolic link
#[derive(Parser)]
#[command(
    name = "linkwire",
    version = concat!(
        env!("CARGO_PKG_VERSION"),
        " (built ",
        env!("BUILD_DATE"),
        ", ",
        env!("RUSTC_VERSION"),
        ")"
    ),
    about = "Ensure a directory exists and symlink it to a source path"
)]
pub struct Cli {
    /// Directory to create (if absent) and place the link at
    #[arg(value_name = "TARGET_PATH")]
    pub target_path: PathBuf,

    /// Path the symbolic link points to
    #[arg(value_name = "SOURCE_PATH")]
    pub source_path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() {
    let cli = match parse_cli(std::env::args_os()) {
        Ok(Some(cli)) => cli,
        Ok(None) => return,
        Err(_) => {
            // The calling build system treats bad arity as a no-op: report
            // and exit cleanly with no filesystem side effects.
            println!("{}", ARGV_COUNT_ERROR);
            return;
        },
    };

    setup_logging(cli.verbose);
    info!("Starting linkwire v{}", env!("CARGO_PKG_VERSION"));

    if run_cli(cli).is_err() {
        std::process::exit(1);
    }
}

/// Parse argv, mapping every failure other than help/version requests to the
/// arity guard. `Ok(None)` means help or version was printed.
fn parse_cli<I, T>(args: I) -> LinkwireResult<Option<Cli>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    // Only non-flag operands count toward the two expected path arguments
    let got = args
        .iter()
        .skip(1)
        .filter(|arg| !arg.to_string_lossy().starts_with('-'))
        .count();

    match Cli::try_parse_from(&args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                let _ = err.print();
                Ok(None)
            },
            _ => Err(LinkwireError::Usage { expected: 2, got }),
        },
    }
}

fn run_cli(cli: Cli) -> LinkwireResult<()> {
    let ctx = CommandContext::new().map_err(|e| {
        OutputHandler::new().report_failure(&e);
        e
    })?;

    if let Err(e) = commands::link::execute(cli.target_path, cli.source_path, &ctx) {
        ctx.output.report_failure(&e);
        return Err(e);
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    // Diagnostics go to stderr; stdout is reserved for the status lines the
    // surrounding build system expects.
    tracing_subscriber::fmt()
        .with_env_filter(format!("linkwire={},linkwire_core={}", level, level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_accepts_two_paths() {
        let cli = parse_cli(["linkwire", "out/include", "third_party/skia/include"])
            .unwrap()
            .unwrap();
        assert_eq!(cli.target_path, PathBuf::from("out/include"));
        assert_eq!(cli.source_path, PathBuf::from("third_party/skia/include"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_cli_rejects_wrong_arity() {
        for args in [
            vec!["linkwire"],
            vec!["linkwire", "only-one"],
            vec!["linkwire", "a", "b", "c"],
        ] {
            let got = args.len() - 1;
            match parse_cli(args) {
                Err(LinkwireError::Usage { expected, got: g }) => {
                    assert_eq!(expected, 2);
                    assert_eq!(g, got);
                },
                other => panic!("expected usage error, got {:?}", other.map(|_| ())),
            }
        }
    }

    #[test]
    fn test_parse_cli_allows_verbose_flag() {
        let cli = parse_cli(["linkwire", "--verbose", "a", "b"]).unwrap().unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_cli_does_not_count_flags_as_paths() {
        match parse_cli(["linkwire", "--verbose", "only-one"]) {
            Err(LinkwireError::Usage { expected, got }) => {
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            },
            other => panic!("expected usage error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_wrong_arity_reports_fixed_error_line() {
        assert!(parse_cli(["linkwire", "only-one"]).is_err());
        assert_eq!(ARGV_COUNT_ERROR, "argv count error, return!");
    }
}
