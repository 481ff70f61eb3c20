//! Command-line front end: log one message through a config-driven logger.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// clog - log a message from the command line.
#[derive(Debug, Parser)]
#[command(name = "clog", version, about = "Log a message from the command line")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Apply the `[apps.<NAME>]` overrides from the config
    #[arg(long, value_name = "NAME")]
    pub app: Option<String>,

    /// Drop messages below this level
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub min_level: Option<LogLevel>,

    /// Also write the plain line to this file (truncated first)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Disable ANSI styling on the console
    #[arg(long)]
    pub no_color: bool,

    /// Do not append a line terminator
    #[arg(long)]
    pub no_newline: bool,

    /// Level of the message
    #[arg(value_enum)]
    pub level: LogLevel,

    /// Message words, joined with single spaces
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

impl Cli {
    /// Config first, then command-line flags on top.
    ///
    /// # Errors
    /// Config loading failures and invalid configured levels.
    pub fn build_logger(&self) -> Result<Logger, crate::Error> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let mut logger = match &self.app {
            Some(app) => Logger::from_config_for_app(&config, app)?,
            None => Logger::from_config(&config)?,
        };

        if let Some(level) = self.min_level {
            logger.set_min_level(level.into());
        }
        if self.no_color {
            logger.set_colors(false);
        }
        if self.no_newline {
            logger.set_append_newline(false);
        }
        if let Some(path) = &self.file {
            logger.set_output_file(path);
        }

        Ok(logger)
    }
}

/// Runs a parsed invocation to completion.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let mut logger = match cli.build_logger() {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let message = cli.message.join(" ");
    logger.log(cli.level.into(), format_args!("{message}"));
    logger.shutdown();
    ExitCode::SUCCESS
}
