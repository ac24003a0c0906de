//! Command-line interface for flightscribe.
//!
//! This module provides the CLI structure for the `flightscribe` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AskCommand, ConfigCommand, LookupCommand, OutputFormat, TableCommand};

/// flightscribe - Look up flight status from the command line
///
/// Queries the AeroDataBox API and falls back to a built-in table of flights
/// when the API is unavailable.
#[derive(Debug, Parser)]
#[command(name = "flightscribe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a flight by number
    Lookup(LookupCommand),

    /// Ask a question about a flight in plain language
    Ask(AskCommand),

    /// List the built-in fallback flights
    Table(TableCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Command {
    /// Whether the command reads the layered configuration.
    ///
    /// `table` and `config path` never touch it, and `config validate`
    /// checks a single file instead.
    #[must_use]
    pub fn needs_config(&self) -> bool {
        match self {
            Self::Lookup(_) | Self::Ask(_) => true,
            Self::Config(cmd) => matches!(cmd, ConfigCommand::Show { .. }),
            Self::Table(_) => false,
        }
    }
}

impl Cli {
    /// The configuration file in effect: `--config` if given, else the
    /// default location.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_config_path)
    }

    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
