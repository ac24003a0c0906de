//! `flightscribe` - CLI for flight status lookup
//!
//! This binary looks up flights by number or answers plain-language
//! questions about them.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use flightscribe::cli::{Cli, Command, ConfigCommand, OutputFormat};
use flightscribe::resolver::StaticTableSource;
use flightscribe::{
    answer_query, init_logging, Config, FlightIdentifier, FlightRecord, FlightResponse,
    Resolution, ResolverChain,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Only commands that use the layered configuration load it
    let config = if cli.command.needs_config() {
        Config::load_from(cli.config.clone()).context("loading configuration")?
    } else {
        Config::default()
    };
    let config_path = cli.config_path();

    match cli.command {
        Command::Lookup(cmd) => {
            let chain = ResolverChain::from_config_with(&config, cmd.offline)?;
            handle_lookup(&chain, &cmd.flight, cmd.format).await
        }
        Command::Ask(cmd) => {
            let chain = ResolverChain::from_config_with(&config, cmd.offline)?;
            let answer = answer_query(&chain, &cmd.query_text()).await;
            match cmd.format {
                OutputFormat::Plain => println!("{answer}"),
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&FlightResponse::from(answer))?
                    );
                }
            }
            Ok(())
        }
        Command::Table(cmd) => handle_table(cmd.format),
        Command::Config(config_cmd) => handle_config(&config, config_cmd, config_path),
    }
}

async fn handle_lookup(
    chain: &ResolverChain,
    flight: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let identifier = FlightIdentifier::new(flight);
    if !identifier.is_well_formed() {
        tracing::warn!(flight = %identifier, "Input does not look like a flight number");
    }

    let resolution = chain.resolve_detailed(&identifier).await;
    if let Resolution::Unavailable { failures } = &resolution {
        for failure in failures {
            tracing::debug!(source = failure.source, error = ?failure.error, "Lookup failure");
        }
        if resolution.is_retryable() {
            eprintln!("Live flight data is temporarily unavailable; try again shortly.");
        }
    }

    match (resolution.record(), format) {
        (Some(record), OutputFormat::Plain) => print_record(record),
        (Some(record), OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        (None, OutputFormat::Plain) => println!("Flight {identifier} not found in database."),
        (None, OutputFormat::Json) => println!("null"),
    }
    Ok(())
}

fn print_record(record: &FlightRecord) {
    println!("Flight:      {}", record.flight_number);
    println!("Departure:   {}", record.departure_time);
    if let Some(airport) = &record.departure_airport {
        println!("From:        {airport}");
    }
    println!("Destination: {}", record.destination);
    println!("Status:      {}", record.status);
    if let Some(aircraft) = &record.aircraft {
        println!("Aircraft:    {aircraft}");
    }
}

fn handle_table(format: OutputFormat) -> anyhow::Result<()> {
    let records = StaticTableSource::new().records();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Plain => {
            println!("{:<8} {:<10} {:<25} {:<10}", "FLIGHT", "DEPARTS", "DESTINATION", "STATUS");
            for record in records {
                println!(
                    "{:<8} {:<10} {:<25} {:<10}",
                    record.flight_number.as_str(),
                    record.departure_time,
                    record.destination,
                    record.status.as_str()
                );
            }
        }
    }
    Ok(())
}

fn handle_config(
    config: &Config,
    cmd: ConfigCommand,
    config_path: PathBuf,
) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[API]");
                println!("  Enabled:            {}", config.api.enabled);
                println!("  Base URL:           {}", config.api.base_url);
                println!("  Host:               {}", config.api.host);
                println!(
                    "  API key:            {}",
                    if config.has_api_key() { "set" } else { "not set" }
                );
                println!("  Timeout (seconds):  {}", config.api.timeout_secs);
                println!();
                println!("[Fallback]");
                println!("  Enabled:            {}", config.fallback.enabled);
            }
        }
        ConfigCommand::Path => {
            println!("{}", config_path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or(config_path);
            println!("Validating configuration: {}", path.display());
            Config::check_file(&path)
                .with_context(|| format!("configuration {} is invalid", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
