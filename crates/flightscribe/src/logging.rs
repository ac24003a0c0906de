//! Diagnostics for flightscribe.
//!
//! Everything here writes to stderr. Stdout carries only answers, records
//! and JSON, so `flightscribe ask ... | jq` keeps working at any `-v` level.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much the resolver reports about each lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// `-q`: only errors, e.g. a config file that fails to parse.
    Quiet,
    /// Source failures and skipped sources are reported as warnings.
    #[default]
    Normal,
    /// `-v`: each source tried, request URLs and result counts.
    Verbose,
    /// `-vv`: everything above plus the HTTP client's own connection logs.
    Trace,
}

impl Verbosity {
    /// Most detailed level emitted by flightscribe itself.
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        let own = format!("flightscribe={}", self.level());
        match self {
            Self::Trace => format!("{own},reqwest=debug"),
            _ => own,
        }
    }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG`, when set, replaces the directives derived from `verbosity`.
/// Later calls are no-ops.
///
/// ```no_run
/// use flightscribe::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directives()));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}

/// Warnings from resolver tests, captured per test.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
