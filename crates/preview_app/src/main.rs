//! url_preview: fetch a URL and preview its status code and body.
//!
//! Usage:
//!   url_preview [--url URL]             Launch the interactive screen
//!   url_preview --headless --url URL    Fetch once and print the result

mod platform;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use platform::logging::{self, LogDestination};
use preview_logging::preview_info;

#[derive(Parser)]
#[command(
    name = "url_preview",
    version,
    about = "Fetch a URL with a plain GET and preview the response"
)]
struct Cli {
    /// URL to pre-fill in the input (required with --headless)
    #[arg(short, long)]
    url: Option<String>,

    /// Config file (defaults to ./url_preview.ron when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fetch once, print the result to stdout and exit
    #[arg(long, requires = "url")]
    headless: bool,

    /// Log file for the interactive screen (overrides the config)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace (overrides the config)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let loaded = platform::config::load(cli.config.as_deref()).context("failed to load config")?;
    let config = loaded.config;

    let level_name = cli.log_level.as_deref().unwrap_or(&config.log.level);
    let Some(level) = preview_logging::parse_level(level_name) else {
        bail!("unknown log level {level_name:?}");
    };

    if cli.headless {
        logging::initialize(LogDestination::Stderr, level);
        log_config_source(loaded.source.as_deref());
        let url = cli.url.unwrap_or_default();
        let ok = platform::run_headless(&config, url, &mut io::stdout().lock())?;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let log_file = cli.log_file.unwrap_or_else(|| config.log.file.clone());
    logging::initialize(LogDestination::File(log_file), level);
    log_config_source(loaded.source.as_deref());
    platform::run_app(&config, cli.url)?;
    Ok(ExitCode::SUCCESS)
}

fn log_config_source(source: Option<&Path>) {
    match source {
        Some(path) => preview_info!("Loaded config from {:?}", path),
        None => preview_info!("No config file found, using defaults"),
    }
}
