//! CLI argument definitions for the patient-records tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "clinic-records",
    version,
    about = "Clinic patient-records reconciliation and reporting",
    long_about = "Reconcile patient rosters with attendance, call, history and payment\n\
                  records from heterogeneous sources, then report daily or monthly\n\
                  summaries and export attendance matrices as CSV."
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
    /// Reconcile one day of attendance against the roster.
    Day(DayArgs),

    /// Summarize a whole month, optionally with payment totals.
    Month(MonthArgs),

    /// Export a month of attendance as a patient x day CSV matrix.
    Export(ExportArgs),

    /// Report ingest diagnostics for each source file.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct DayArgs {
    /// Path to the roster JSON array.
    #[arg(long = "roster", value_name = "JSON")]
    pub roster: PathBuf,

    /// Path to the attendance events JSON array.
    #[arg(long = "attendance", value_name = "JSON")]
    pub attendance: PathBuf,

    /// Calendar day to reconcile.
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: String,
}

#[derive(Parser)]
pub struct MonthArgs {
    /// Path to the roster JSON array.
    #[arg(long = "roster", value_name = "JSON")]
    pub roster: PathBuf,

    /// Path to the attendance events JSON array.
    #[arg(long = "attendance", value_name = "JSON")]
    pub attendance: PathBuf,

    /// Path to the payment events JSON array (adds financial totals).
    #[arg(long = "payments", value_name = "JSON")]
    pub payments: Option<PathBuf>,

    /// Reporting month (1-12).
    #[arg(long = "month", value_name = "M")]
    pub month: u32,

    /// Reporting year.
    #[arg(long = "year", value_name = "YYYY")]
    pub year: i32,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the roster JSON array.
    #[arg(long = "roster", value_name = "JSON")]
    pub roster: PathBuf,

    /// Path to the attendance events JSON array.
    #[arg(long = "attendance", value_name = "JSON")]
    pub attendance: PathBuf,

    /// Reporting month (1-12).
    #[arg(long = "month", value_name = "M")]
    pub month: u32,

    /// Reporting year.
    #[arg(long = "year", value_name = "YYYY")]
    pub year: i32,

    /// Output directory for the CSV file (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the roster JSON array.
    #[arg(long = "roster", value_name = "JSON")]
    pub roster: Option<PathBuf>,

    /// Path to the attendance events JSON array.
    #[arg(long = "attendance", value_name = "JSON")]
    pub attendance: Option<PathBuf>,

    /// Path to the call log JSON array.
    #[arg(long = "calls", value_name = "JSON")]
    pub calls: Option<PathBuf>,

    /// Path to the medical-history JSON array.
    #[arg(long = "history", value_name = "JSON")]
    pub history: Option<PathBuf>,

    /// Path to the payment events JSON array.
    #[arg(long = "payments", value_name = "JSON")]
    pub payments: Option<PathBuf>,
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
