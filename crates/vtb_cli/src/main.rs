//! vtb CLI — the command-line interface for the VHDL testbench generator.
//!
//! Provides `vtb generate` for writing a testbench skeleton next to each VHDL
//! source file, and `vtb inspect` for printing the interface the generator
//! recovered from a file.

#![warn(missing_docs)]

mod generate;
mod inspect;
mod pipeline;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

/// vtb — generate VHDL testbench skeletons from entity declarations.
#[derive(Parser, Debug)]
#[command(name = "vtb", version, about = "VHDL Testbench Generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `vtb.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a testbench for each input file.
    Generate(GenerateArgs),
    /// Print the interface extracted from a file.
    Inspect(InspectArgs),
}

/// Arguments for the `vtb generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// VHDL source files. Use `-` to read standard input.
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Print testbenches to standard output instead of writing files.
    #[arg(long)]
    pub stdout: bool,

    /// Write the testbench to this path (single input only).
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<String>,
}

/// Arguments for the `vtb inspect` subcommand.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// VHDL source file. Use `-` to read standard input.
    pub file: String,

    /// Output format for the interface report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Interface report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };
    init_logging(&global);

    let result = match cli.command {
        Command::Generate(ref args) => generate::run(args, &global),
        Command::Inspect(ref args) => inspect::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over the
/// verbosity flags.
fn init_logging(global: &GlobalArgs) {
    let level = log_level(global);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    let _ = Registry::default()
        .with(filter)
        .with(
            subscriber_fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn log_level(global: &GlobalArgs) -> Level {
    if global.quiet {
        Level::ERROR
    } else if global.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}
