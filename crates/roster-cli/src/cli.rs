//! CLI argument definitions for RosMan.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rosman",
    version,
    about = "RosMan - Roster Manager: build and export employee shift rosters",
    long_about = "Build an employee shift roster from a CSV employee list and a date range.\n\n\
                  Each day has a morning and an afternoon slot per employee; legal shift\n\
                  codes depend on the employee's role (Manager/Service/Other). Exports the\n\
                  roster as XLSX or CSV with one merged column per day."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the roster and print the editable grid to the terminal.
    Show(RosterArgs),

    /// Build the roster and write the export file(s).
    Export(ExportArgs),

    /// List the legal shift codes per role and day half.
    Codes,

    /// Classify free-text position strings into roles.
    Classify(ClassifyArgs),
}

#[derive(Parser)]
pub struct RosterArgs {
    /// Path to the employee CSV (requires FullName and Position columns).
    #[arg(value_name = "EMPLOYEES_CSV")]
    pub employees: PathBuf,

    /// First day of the roster (YYYY-MM-DD).
    #[arg(long = "start", value_name = "DATE")]
    pub start: NaiveDate,

    /// Last day of the roster, inclusive (YYYY-MM-DD).
    #[arg(long = "end", value_name = "DATE")]
    pub end: NaiveDate,

    /// JSON file with shift assignments to apply before rendering.
    ///
    /// An array of entries like
    /// {"employee": "Anna", "day": "01-03", "half": "morning", "code": "Q1"}.
    /// The employee may be given as a row index or a FullName. Entries
    /// that violate the assignment rules are skipped with a warning.
    #[arg(long = "assignments", value_name = "JSON")]
    pub assignments: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    /// Output path (default: LichLamViec.xlsx, or .csv for CSV format).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export file format to generate.
    #[arg(long = "format", value_enum, default_value = "xlsx")]
    pub format: ExportFormatArg,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Position strings to classify.
    #[arg(value_name = "POSITION", required = true)]
    pub positions: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Xlsx,
    Csv,
    Both,
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
