//! validate-version
//!
//! Checks a version string supplied by the build pipeline against the
//! version module of an engine checkout.

use anyhow::{Context, Result};
use clap::Parser;
use common::{EXIT_MISMATCH, EXIT_OK, EXIT_SOURCE, SourceArgs, load_version_record, setup_logging};
use record::VersionRecord;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "validate-version")]
#[command(
    author,
    version,
    about = "Check a version string against an engine checkout"
)]
#[command(long_about = "
Compares CANDIDATE with the canonical version string of an engine checkout
(major.minor, plus .patch when the patch is non-zero). The comparison is an
exact string match: \"4.3.0\" does not match a 4.3 checkout.

EXAMPLES:
    # Fail the pipeline step unless ./git is at 4.3
    validate-version 4.3

    # Report a mismatch without failing
    validate-version --warn-only 4.3.1

EXIT STATUS:
    0  versions match (or --warn-only)
    1  versions differ
    2  invalid invocation
    3  version source or configuration unusable
")]
struct Args {
    /// Version string to check, e.g. 4.3 or 4.3.1
    #[arg(value_name = "CANDIDATE")]
    candidate: String,

    /// Print the mismatch message but exit successfully
    #[arg(long)]
    warn_only: bool,

    #[command(flatten)]
    source: SourceArgs,
}

/// Result of comparing a candidate against the checkout
#[derive(Debug, Clone, PartialEq, Eq)]
enum Verdict {
    Valid,
    Mismatch { expected: String },
}

impl Verdict {
    fn of(record: &VersionRecord, candidate: &str) -> Self {
        if record.matches(candidate) {
            Verdict::Valid
        } else {
            Verdict::Mismatch {
                expected: record.format(),
            }
        }
    }

    fn message(&self) -> String {
        match self {
            Verdict::Valid => "Version is valid.".to_string(),
            Verdict::Mismatch { expected } => {
                format!("Version does not match: expected {}.", expected)
            }
        }
    }

    fn exit_code(&self, warn_only: bool) -> u8 {
        match self {
            Verdict::Valid => EXIT_OK,
            Verdict::Mismatch { .. } if warn_only => EXIT_OK,
            Verdict::Mismatch { .. } => EXIT_MISMATCH,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_SOURCE)
        }
    }
}

fn run(args: &Args) -> Result<u8> {
    let config = args.source.resolve()?;
    setup_logging(&config.tool.log_level).context("Failed to setup logging")?;

    let record = load_version_record(&config.source.path())?;
    let verdict = Verdict::of(&record, &args.candidate);

    match &verdict {
        Verdict::Valid => info!("Candidate {:?} matches checkout", args.candidate),
        Verdict::Mismatch { expected } => warn!(
            "Candidate {:?} does not match checkout version {:?}",
            args.candidate, expected
        ),
    }

    println!("{}", verdict.message());
    Ok(verdict.exit_code(args.warn_only))
}
