//! CLI argument definitions for `cablecheck`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use cable_cli::confirm::ConfirmMode;

#[derive(Parser)]
#[command(
    name = "cablecheck",
    version,
    about = "Cable list checker - validate cable inventory lists before deployment",
    long_about = "Validate cable inventory lists exported as CSV.\n\n\
                  Checks naming rules, model and port catalogs, connection symmetry\n\
                  and rosette numbering, and reconciles against a network diagram."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Validate one cable list.
    Check(CheckArgs),

    /// Classify router uplink usage per site.
    Router(RouterArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Cable list: a CSV file, or a directory of CSV sheets.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Hostname prefix every host must start with.
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Checker configuration (TOML).
    #[arg(long = "config", value_name = "FILE")]
    pub config: PathBuf,

    /// Network diagram inventory (CSV) to reconcile against.
    #[arg(long = "diagram", value_name = "CSV")]
    pub diagram: Option<PathBuf>,

    /// How to answer the multiple-connection question.
    #[arg(long = "confirm", value_enum, default_value = "ask")]
    pub confirm: ConfirmArg,

    /// Write the validation report as JSON.
    #[arg(long = "report", value_name = "JSON")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RouterArgs {
    /// Cable lists, one per site.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Checker configuration (TOML).
    #[arg(long = "config", value_name = "FILE")]
    pub config: PathBuf,

    /// Write `site,UsageName` lines to this file.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ConfirmArg {
    Ask,
    Yes,
    No,
}

impl From<ConfirmArg> for ConfirmMode {
    fn from(arg: ConfirmArg) -> Self {
        match arg {
            ConfirmArg::Ask => ConfirmMode::Ask,
            ConfirmArg::Yes => ConfirmMode::Yes,
            ConfirmArg::No => ConfirmMode::No,
        }
    }
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
