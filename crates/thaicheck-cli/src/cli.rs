//! CLI argument definitions for the validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use thaicheck_ingest::MAX_CSV_FILE_SIZE;

#[derive(Parser)]
#[command(
    name = "thaicheck",
    version,
    about = "Validate Thai national ID, name and address columns in CSV files",
    long_about = "Validate Thai identity data in CSV files.\n\n\
                  Columns are found by header text (English or Thai). Each row is checked for\n\
                  a national ID with a correct check digit, a Thai-script address, and a\n\
                  Thai-script full name with given name and surname."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include row values (IDs, names, addresses) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate every row of a CSV file.
    Validate(ValidateArgs),

    /// Check one or more national ID numbers.
    CheckId(CheckIdArgs),

    /// Show which columns would be used for ID, address and name.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// CSV file to validate (`-` reads from stdin).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format for the results.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Also write the JSON report to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only list rows that failed at least one check.
    #[arg(long = "invalid-only")]
    pub invalid_only: bool,

    /// Exit with status 1 when any row is invalid.
    #[arg(long = "fail-on-invalid")]
    pub fail_on_invalid: bool,

    /// Reject input files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES", default_value_t = MAX_CSV_FILE_SIZE)]
    pub max_file_size: u64,
}

#[derive(Parser)]
pub struct CheckIdArgs {
    /// National ID numbers to check.
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// CSV file to inspect (`-` reads from stdin).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Reject input files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES", default_value_t = MAX_CSV_FILE_SIZE)]
    pub max_file_size: u64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
