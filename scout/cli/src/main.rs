//! Scout CLI - look up a LinkedIn profile through ScrapingDog

use clap::Parser;
use scout_lib::config::{ENDPOINT_ENV, TIMEOUT_ENV, parse_timeout_secs};
use scout_lib::{ProfileQuery, RenderStyle, ResourceType, ScoutClient, ScoutConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod output;

/// Look up a LinkedIn profile through the ScrapingDog API
#[derive(Parser)]
#[command(name = "scout", version, about, after_help = AFTER_HELP)]
struct Cli {
    /// LinkedIn identifier of the page to look up (the `linkId`)
    #[arg(value_name = "LINK_ID")]
    link_id: String,

    /// Kind of page to look up
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "profile")]
    resource_type: ResourceType,

    /// Send `private=true` instead of `private=false`
    #[arg(long)]
    private: bool,

    /// Endpoint URL [default: SCRAPINGDOG_ENDPOINT or the ScrapingDog API]
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Request timeout in seconds [default: SCRAPINGDOG_TIMEOUT_SECS or none]
    #[arg(long, value_name = "SECS", value_parser = parse_timeout_arg)]
    timeout: Option<u64>,

    /// Print single-line JSON instead of indented JSON
    #[arg(long)]
    compact: bool,

    /// Also write the JSON body to this file on success
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long)]
    log_json: bool,
}

const AFTER_HELP: &str = "\
ENVIRONMENT:
  SCRAPINGDOG_API_KEY       API key (required; also read from ./.env)
  SCRAPINGDOG_ENDPOINT      Endpoint override
  SCRAPINGDOG_TIMEOUT_SECS  Request timeout in seconds

OUTPUT:
  On status 200 the JSON body is printed to stdout. Any other status prints
  'Request failed with status code: <code>' and still exits 0.

  Examples:
    scout deepak-kumar-mohanty-09aa59230
    scout acme-corp --type company --compact
    scout deepak-kumar-mohanty-09aa59230 -o data.json
";

fn parse_timeout_arg(raw: &str) -> Result<u64, String> {
    parse_timeout_secs(raw).map_err(|e| e.to_string())
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    // RUST_LOG wins over -v flags
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,scout_lib=info,scout=info".to_string(),
            2 => "info,scout_lib=debug,scout=debug".to_string(),
            _ => "debug,scout_lib=trace,scout=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr; stdout carries only the lookup result.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

/// Merge environment configuration with command-line overrides.
///
/// Environment values shadowed by a flag are never read, so a malformed
/// `SCRAPINGDOG_TIMEOUT_SECS` cannot fail a run that passes `--timeout`.
fn build_config(cli: &Cli) -> scout_lib::Result<ScoutConfig> {
    let mut config = ScoutConfig::from_lookup(|name| {
        let shadowed = (name == ENDPOINT_ENV && cli.endpoint.is_some())
            || (name == TIMEOUT_ENV && cli.timeout.is_some());
        if shadowed {
            None
        } else {
            std::env::var(name).ok()
        }
    })?;
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_endpoint(endpoint.as_str());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

/// Run one lookup and write its outcome.
async fn run(cli: Cli) -> scout_lib::Result<()> {
    let config = build_config(&cli)?;
    tracing::debug!(config = ?config, "Configuration loaded");

    let query = ProfileQuery::new(cli.link_id.as_str())
        .with_resource_type(cli.resource_type)
        .with_private(cli.private);

    let client = ScoutClient::new(config)?;
    let outcome = client.fetch(&query).await?;

    let style = if cli.compact {
        RenderStyle::Compact
    } else {
        RenderStyle::Pretty
    };

    output::print_outcome(&outcome, style)?;

    if let Some(path) = &cli.output {
        output::write_data_file(&outcome, style, path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Only ./.env is read, and real environment variables win over its entries
    dotenvy::from_path(".env").ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.log_json);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
