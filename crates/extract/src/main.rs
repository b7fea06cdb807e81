//! extract-version
//!
//! Prints the version or release status of an engine checkout, read from
//! the version module at its root.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use common::{EXIT_OK, EXIT_SOURCE, SourceArgs, load_version_record, setup_logging};
use record::VersionRecord;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "extract-version")]
#[command(
    author,
    version,
    about = "Print the version or status of an engine checkout"
)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["get_version", "get_version_status"])
))]
#[command(long_about = "
Reads the version module of an engine checkout and prints one line.

EXAMPLES:
    # Canonical version string (patch omitted when zero)
    extract-version --get-version

    # Release status label
    extract-version --get-version-status

    # Checkout somewhere other than ./git
    extract-version --get-version --source-dir ~/src/engine

EXIT STATUS:
    0  success
    2  invalid invocation
    3  version source or configuration unusable
")]
struct Args {
    /// Print the canonical version string (major.minor[.patch])
    #[arg(long)]
    get_version: bool,

    /// Print the release status label
    #[arg(long)]
    get_version_status: bool,

    #[command(flatten)]
    source: SourceArgs,
}

/// What to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Version,
    Status,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.get_version_status {
            Mode::Status
        } else {
            Mode::Version
        }
    }
}

fn render(version: &VersionRecord, mode: Mode) -> String {
    match mode {
        Mode::Version => record::format(version),
        Mode::Status => record::status_of(version),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_SOURCE)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.source.resolve()?;
    setup_logging(&config.tool.log_level).context("Failed to setup logging")?;

    let path = config.source.path();
    debug!("Mode: {:?}, source: {}", args.mode(), path.display());

    let record = load_version_record(&path)?;
    println!("{}", render(&record, args.mode()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_mode_flags() {
        let args = Args::try_parse_from(["extract-version", "--get-version"]).unwrap();
        assert_eq!(args.mode(), Mode::Version);

        let args = Args::try_parse_from(["extract-version", "--get-version-status"]).unwrap();
        assert_eq!(args.mode(), Mode::Status);
    }

    #[test]
    fn test_mode_required() {
        let err = Args::try_parse_from(["extract-version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), i32::from(common::EXIT_USAGE));
    }

    #[test]
    fn test_modes_conflict() {
        let err = Args::try_parse_from([
            "extract-version",
            "--get-version",
            "--get-version-status",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_unknown_mode() {
        let err = Args::try_parse_from(["extract-version", "--get-everything"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_render() {
        let record = VersionRecord::new(4, 3).with_patch(0).with_status("stable");
        assert_eq!(render(&record, Mode::Version), "4.3");
        assert_eq!(render(&record, Mode::Status), "stable");

        let record = record.with_patch(1);
        assert_eq!(render(&record, Mode::Version), "4.3.1");
    }
}
