//! Command-line entry point.
//!
//! # Responsibility
//! - Keep the smoke probe for core crate linkage (`ping`, `version`).
//! - Load record batches from JSON files into a fresh store and render the
//!   outcome.
//! - Replay the to-do client walk-through against an in-process store.
//!
//! # Invariants
//! - Each invocation owns one fresh store; nothing persists between runs.
//! - Exit codes: 0 ok, 1 input error, 2 validation, 3 conflict, 4 not found.

mod batch;
mod demo;

use clap::{Parser, Subcommand, ValueEnum};
use recordbook_core::ServiceError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "recordbook", version, about = "In-memory record store tools")]
struct Cli {
    /// Log level written to stderr (trace|debug|info|warn|error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints the core health-check response.
    Ping,
    /// Prints the core crate version.
    Version,
    /// Creates every record of a JSON array file in a fresh store.
    Batch {
        #[arg(long, value_enum)]
        kind: RecordKind,
        file: PathBuf,
    },
    /// Runs the to-do create/list/get/update/delete walk-through.
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Students,
    Todos,
    /// Vehicle drafts; identifiers are generated.
    Vehicles,
}

/// CLI failure with its process exit code.
#[derive(Debug)]
pub enum CliError {
    Input(String),
    Service(ServiceError),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Input(_) => 1,
            Self::Service(ServiceError::Validation { .. }) => 2,
            Self::Service(err) if err.is_conflict() => 3,
            Self::Service(_) => 4,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(message) => write!(f, "{message}"),
            Self::Service(err) => write!(f, "{err}"),
        }
    }
}

impl From<ServiceError> for CliError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = recordbook_core::init_logging(&cli.log_level, None) {
        eprintln!("error: {err}");
        return ExitCode::from(1);
    }

    let outcome = match cli.command {
        Command::Ping => {
            println!("recordbook_core ping={}", recordbook_core::ping());
            Ok(())
        }
        Command::Version => {
            println!("recordbook_core version={}", recordbook_core::core_version());
            Ok(())
        }
        Command::Batch { kind, file } => batch::run(kind, &file).map(|rendered| println!("{rendered}")),
        Command::Demo => demo::run().map(|lines| {
            for line in lines {
                println!("{line}");
            }
        }),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::warn!(
                "event=cli_command module=cli status=error exit_code={}",
                err.exit_code()
            );
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
