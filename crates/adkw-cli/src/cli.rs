//! CLI argument definitions for the keyword evaluator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use adkw_cli::pipeline::ExportFormat;
use adkw_model::Locale;

#[derive(Parser)]
#[command(
    name = "adkw",
    version,
    about = "Ad keyword evaluator - Tier search terms from a sponsored ads report",
    long_about = "Classify the search terms of a sponsored ads search-term report into\n\
                  high and low performers and print a formatted evaluation table.\n\n\
                  Export the report sheet to CSV (UTF-8) before running."
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

    /// Allow search-term text to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the ad groups found in a report.
    Groups(GroupsArgs),

    /// Classify the selected ad groups and print the evaluation.
    Analyze(AnalyzeArgs),

    /// Show the classification thresholds.
    Tags,
}

#[derive(Parser)]
pub struct GroupsArgs {
    /// Search-term report exported as CSV.
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Search-term report exported as CSV.
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Ad group to include (repeatable).
    #[arg(short = 'g', long = "group", value_name = "LABEL")]
    pub groups: Vec<String>,

    /// Include every ad group in the report.
    #[arg(long = "all-groups", conflicts_with = "groups")]
    pub all_groups: bool,

    /// Language of labels and markers.
    #[arg(long = "locale", value_enum, default_value = "en")]
    pub locale: LocaleArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write csv/json output to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LocaleArg {
    En,
    Ja,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::Ja => Locale::Ja,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Csv,
    Json,
}

impl OutputFormatArg {
    /// File format for csv/json; `None` renders to the terminal.
    pub fn export_format(self) -> Option<ExportFormat> {
        match self {
            OutputFormatArg::Table => None,
            OutputFormatArg::Csv => Some(ExportFormat::Csv),
            OutputFormatArg::Json => Some(ExportFormat::Json),
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
