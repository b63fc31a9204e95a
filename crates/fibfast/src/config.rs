//! Application configuration from CLI flags and environment.
//!
//! Numeric arguments are taken as raw text and coerced by
//! `fibfast_core::input`, so malformed or omitted input surfaces as a
//! `FibError` with its own exit code rather than a clap usage error.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use fibfast_cli::OutputFormat;

/// fibfast — Fibonacci numbers by fast doubling: F(k), the index of a value,
/// ranges and lazy streams.
#[derive(Parser, Debug)]
#[command(name = "fibfast", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Print long numbers in full instead of truncating them.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the numbers).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show the next value, size and elapsed time.
    #[arg(short, long, global = true)]
    pub details: bool,

    /// Output format.
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "FIBFAST_FORMAT",
        global = true
    )]
    pub format: OutputFormat,

    /// Output file path (defaults to stdout).
    #[arg(short, long, global = true)]
    pub output: Option<String>,
}

/// Operations exposed on the command line.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute F(k).
    Get {
        /// Index k (non-negative integer).
        #[arg(allow_hyphen_values = true)]
        k: Option<String>,
    },

    /// Find the index of a Fibonacci number.
    Find {
        /// Value to look up.
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Print whether a value is a Fibonacci number.
    Is {
        /// Value to test.
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Stream the sequence, forever unless --count is given.
    Iter {
        /// Starting index.
        #[arg(short = 'k', long, allow_hyphen_values = true)]
        start: Option<String>,

        /// Number of values to print.
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        count: Option<String>,
    },

    /// Print F(k0) .. F(k1 - 1).
    Array {
        /// First index (inclusive).
        #[arg(allow_hyphen_values = true)]
        k0: Option<String>,

        /// Last index (exclusive).
        #[arg(allow_hyphen_values = true)]
        k1: Option<String>,
    },

    /// Generate a shell completion script.
    Completion {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
