use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::error;

use spire::blueprint::build_blueprint;
use spire::config::get_config;
use spire::display::ReportRenderer;
use spire::ingest::RawPayload;
use spire::locale::Locale;
use spire::logging::init_logging;

#[derive(Parser)]
#[command(name = "spire")]
#[command(about = "Contribution-tower analytics: calendar in, floors and statistics out")]
#[command(version = "1.0.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Narrated statistics report for a stored contribution payload
    Report {
        /// Path to the provider JSON payload, or '-' for stdin
        payload: PathBuf,
        /// Output the raw blueprint as JSON instead of the report
        #[arg(long)]
        json: bool,
        /// Month-name locale (en or fr)
        #[arg(long)]
        locale: Option<Locale>,
    },
    /// Emit the assembled blueprint as JSON
    Blueprint {
        /// Path to the provider JSON payload, or '-' for stdin
        payload: PathBuf,
        /// Single-line output instead of pretty-printed
        #[arg(long)]
        compact: bool,
        /// Month-name locale (en or fr)
        #[arg(long)]
        locale: Option<Locale>,
    },
    /// Print the floor table only
    Floors {
        /// Path to the provider JSON payload, or '-' for stdin
        payload: PathBuf,
        /// Month-name locale (en or fr)
        #[arg(long)]
        locale: Option<Locale>,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let renderer = ReportRenderer::new();

    match cli.command {
        Commands::Report {
            payload,
            json,
            locale,
        } => {
            let blueprint = build_blueprint(load_payload(&payload)?, resolve_locale(locale));
            if json {
                renderer.render_json(&blueprint, get_config().output.json_pretty)?;
            } else {
                renderer.render(&blueprint);
            }
        }
        Commands::Blueprint {
            payload,
            compact,
            locale,
        } => {
            let blueprint = build_blueprint(load_payload(&payload)?, resolve_locale(locale));
            renderer.render_json(&blueprint, !compact)?;
        }
        Commands::Floors { payload, locale } => {
            let blueprint = build_blueprint(load_payload(&payload)?, resolve_locale(locale));
            renderer.render_floors(&blueprint.floors);
        }
    }

    Ok(())
}

fn resolve_locale(flag: Option<Locale>) -> Locale {
    flag.unwrap_or(get_config().locale)
}

/// Read the payload from a file or stdin. I/O failures are hard errors;
/// content that is not the expected shape degrades to an absent payload so
/// the engine can fall back to the empty blueprint.
fn load_payload(path: &PathBuf) -> Result<RawPayload> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read payload from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload file: {}", path.display()))?
    };

    match serde_json::from_str(&content) {
        Ok(payload) => Ok(payload),
        Err(e) => {
            error!(error = %e, "payload is not a provider response; rendering empty blueprint");
            Ok(RawPayload::default())
        }
    }
}
