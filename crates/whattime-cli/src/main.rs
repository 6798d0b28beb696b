//! whattime CLI entry point.

use std::io::{self, BufRead};
use std::process::ExitCode;

use chrono::Utc;
use chrono_tz::Tz;
use clap::Parser;
use tracing::debug;

use whattime_cli::cli::Cli;
use whattime_cli::config::CliConfig;
use whattime_cli::error::{CliError, CliResult};
use whattime_cli::input;
use whattime_core::{MessageFormatter, TracingConfig, ZoneCatalog, init_tracing, parse_zone};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = if cli.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = if let Some(ref path) = cli.config {
        CliConfig::load_from(path).map_err(CliError::Config)?
    } else {
        CliConfig::load().unwrap_or_default()
    };

    let home = match config.home_zone.as_deref() {
        Some(id) => parse_zone(id)?,
        None => chrono_tz::UTC,
    };
    let catalog = ZoneCatalog::new(home);

    if cli.list_zones {
        for entry in catalog.entries(Utc::now()) {
            println!("{}", entry);
        }
        return Ok(());
    }

    let zones = resolve_zones(&cli, &config, &catalog)?;
    let style = cli.display_style(config.display.style);
    let options = cli.format_options(config.display.options());
    debug!(?style, ?options, zones = zones.len(), "rendering availability");

    let intervals = if cli.intervals.is_empty() {
        let lines: Vec<String> = io::stdin().lock().lines().collect::<Result<_, _>>()?;
        input::parse_intervals(lines.iter().map(String::as_str))?
    } else {
        input::parse_intervals(cli.intervals.iter().map(String::as_str))?
    };

    let formatter = MessageFormatter::new(options);
    println!("{}", formatter.clipboard_text(&intervals, &zones, style));
    Ok(())
}

/// Resolves the zones to render: CLI flags beat config, config beats the
/// home zone.
fn resolve_zones(cli: &Cli, config: &CliConfig, catalog: &ZoneCatalog) -> CliResult<Vec<Tz>> {
    let ids: Vec<&str> = if !cli.zones.is_empty() {
        cli.zones.iter().map(String::as_str).collect()
    } else if !config.zones.is_empty() {
        config.zones.iter().map(String::as_str).collect()
    } else {
        return Ok(vec![catalog.home()]);
    };

    ids.into_iter()
        .map(|id| parse_zone(id).map_err(CliError::from))
        .collect()
}
