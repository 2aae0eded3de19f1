//! CLI argument definitions for the tire wear report.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;
use tread_cli::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "tread",
    version,
    about = "Fleet tire wear report",
    long_about = "Estimate tire wear, risk condition and replacement cost for a fleet.\n\n\
                  Reads a workbook directory holding pneus.csv, posição.csv and sulco.csv,\n\
                  prints KPI tables and writes full and at-risk CSV exports."
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
}

impl Cli {
    /// Logging setup for this invocation.
    ///
    /// `--log-level` beats `-v`/`-q`; either one disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter,
            use_env_filter: !(self.verbosity.is_present() || self.log_level.is_some()),
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline and print the fleet report.
    Report(ReportArgs),

    /// List the sheets found in a workbook directory.
    Sheets(SheetsArgs),
}

#[derive(Args)]
pub struct WorkbookArgs {
    /// Directory holding one CSV file per sheet.
    #[arg(value_name = "WORKBOOK_DIR")]
    pub workbook_dir: PathBuf,

    /// Field separator of the sheet files.
    #[arg(long = "separator", value_name = "CHAR", default_value = ",", value_parser = parse_separator)]
    pub separator: u8,
}

#[derive(Parser)]
pub struct SheetsArgs {
    #[command(flatten)]
    pub workbook: WorkbookArgs,
}

#[derive(Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub workbook: WorkbookArgs,

    /// Output directory for CSV exports (default: <WORKBOOK_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML file with thresholds, costs and colors.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Tread depth (mm) at or below which a tire is critical.
    #[arg(long = "critical-mm", value_name = "MM")]
    pub critical_mm: Option<f64>,

    /// Tread depth (mm) at or below which a tire is in alert.
    #[arg(long = "alert-mm", value_name = "MM")]
    pub alert_mm: Option<f64>,

    /// Price of one replacement tire.
    #[arg(long = "unit-cost", value_name = "AMOUNT")]
    pub unit_cost: Option<f64>,

    /// Cost of one hour of vehicle downtime.
    #[arg(long = "downtime-cost", value_name = "AMOUNT")]
    pub downtime_cost: Option<f64>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print one JSON document instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Compute and print the report without writing CSV files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Row filters. Repeat a flag to accept several values.
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Keep rows with this Status.
    #[arg(long = "status", value_name = "VALUE")]
    pub status: Vec<String>,

    /// Keep rows with this vehicle plate.
    #[arg(long = "plate", value_name = "VALUE")]
    pub plate: Vec<String>,

    /// Keep rows with this vehicle type (e.g. Toco, Truck).
    #[arg(long = "vehicle-type", value_name = "VALUE")]
    pub vehicle_type: Vec<String>,

    /// Keep rows with this brand.
    #[arg(long = "brand", value_name = "VALUE")]
    pub brand: Vec<String>,

    /// Keep rows with this life-cycle stage.
    #[arg(long = "stage", value_name = "VALUE")]
    pub stage: Vec<String>,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

fn parse_separator(value: &str) -> Result<u8, String> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!("separator must be a single ASCII character, got '{value}'")),
        },
    }
}
