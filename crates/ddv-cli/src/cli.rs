//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ddv",
    version,
    about = "Validate data dictionary table and column names against naming conventions",
    long_about = "Validate data dictionary table and column names against naming conventions.\n\n\
                  Checks table-name shape, approved abbreviations and class words,\n\
                  class-word/data-type compatibility and English-name capitalization,\n\
                  then writes a report with suggested corrections and sample values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: ./ddv.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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

    /// Include row values (English names, descriptions) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a data dictionary CSV and write the report.
    Validate(ValidateArgs),

    /// List or import the reference vocabulary.
    Standards(StandardsArgs),

    /// Show or replace the persisted domain naming rules.
    Rules(RulesArgs),
}

/// Overrides for the reference vocabulary files.
#[derive(Args, Clone, Default)]
pub struct ReferenceArgs {
    /// Abbreviation CSV with NAME and ABBR columns.
    #[arg(long = "abbreviations", value_name = "PATH")]
    pub abbreviations: Option<PathBuf>,

    /// Class word CSV with a CLASS WORD column.
    #[arg(long = "class-words", value_name = "PATH")]
    pub class_words: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Data dictionary CSV.
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    #[command(flatten)]
    pub reference: ReferenceArgs,

    /// Domain naming rules text passed to the correction advisor.
    #[arg(long = "domain-rules", value_name = "PATH")]
    pub domain_rules: Option<PathBuf>,

    /// Output directory for reports (default: directory of the dictionary).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report format to write.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ReportFormatArg,

    /// Skip the language model; failing rows keep their names.
    #[arg(long = "offline")]
    pub offline: bool,

    /// Model name for corrections and sample values.
    #[arg(long = "model", value_name = "NAME")]
    pub model: Option<String>,

    /// Seed for sample value generation.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Print details for one record (TABLE.COLUMN) instead of all failures.
    #[arg(long = "show", value_name = "TABLE.COLUMN")]
    pub show: Option<String>,

    /// Exit with status 0 even when rows fail validation.
    #[arg(long = "no-fail-on-violations")]
    pub no_fail_on_violations: bool,
}

#[derive(Parser)]
pub struct StandardsArgs {
    #[command(subcommand)]
    pub action: Option<StandardsAction>,

    #[command(flatten)]
    pub reference: ReferenceArgs,
}

#[derive(Subcommand)]
pub enum StandardsAction {
    /// Normalize the given CSVs and save them into the standards directory.
    Import(ReferenceArgs),
}

#[derive(Parser)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub action: RulesAction,
}

#[derive(Subcommand)]
pub enum RulesAction {
    /// Print the persisted domain rules.
    Show,
    /// Replace the persisted domain rules with the contents of FILE.
    Set {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Csv,
    Json,
    Both,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
