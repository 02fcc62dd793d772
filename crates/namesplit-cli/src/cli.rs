//! CLI argument definitions for the roster name splitter.

use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use namesplit_ingest::{DEFAULT_EXAMPLE_LIMIT, SplitOptions};

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "split-names",
    version,
    about = "Split the roster name column into first_name and last_name",
    long_about = "Read db/universe.users.trimmed.csv, split its name column on the first\n\
                  space into first_name and last_name, and write\n\
                  db/universe.users.trimmed.modified.csv."
)]
pub struct Cli {
    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Include names and other row values in log output.
    #[arg(long = "log-data")]
    pub log_data: bool,

    /// Split and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number of example splits to show in the summary.
    #[arg(long = "examples", value_name = "N", default_value_t = DEFAULT_EXAMPLE_LIMIT)]
    pub examples: usize,
}

impl Cli {
    /// Build logging configuration from CLI flags with consistent precedence.
    ///
    /// `stderr_is_terminal` decides ANSI output when color is `auto`.
    pub fn log_config(&self, stderr_is_terminal: bool) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            ..LogConfig::default()
        };
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.log_file = self.log_file.clone();
        config.log_data = self.log_data;
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && stderr_is_terminal,
        };
        config
    }

    /// Split options for the fixed roster paths.
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions::default()
            .with_example_limit(self.examples)
            .with_dry_run(self.dry_run)
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
