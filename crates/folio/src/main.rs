// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Folio - chat relay and email-verification service for the
//! "Physical AI & Humanoid Robotics" book site.
//!
//! This is the binary entry point.

mod serve;

use clap::{Parser, Subcommand};

/// Folio - chat relay and email-verification service.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Folio server (the default when no subcommand is given).
    Serve,
    /// Print the resolved configuration with secrets redacted.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match folio_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            folio_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    match cli.command {
        Some(Commands::Config) => {
            let redacted = redact(config);
            match toml::to_string_pretty(&redacted) {
                Ok(rendered) => print!("{rendered}"),
                Err(e) => {
                    eprintln!("folio: failed to render config: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Serve) | None => {
            if let Err(e) = serve::run(config).await {
                tracing::error!(error = %e, "server exited with error");
                std::process::exit(1);
            }
        }
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `agent.log_level` seeds the filter.
fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Blank out secret-bearing fields before printing.
fn redact(mut config: folio_config::FolioConfig) -> folio_config::FolioConfig {
    const REDACTED: &str = "[redacted]";
    for section in [
        &mut config.providers.gemini,
        &mut config.providers.openrouter,
        &mut config.providers.groq,
    ] {
        if section.api_key.is_some() {
            section.api_key = Some(REDACTED.to_string());
        }
    }
    if config.smtp.password.is_some() {
        config.smtp.password = Some(REDACTED.to_string());
    }
    if config.identity.service_key.is_some() {
        config.identity.service_key = Some(REDACTED.to_string());
    }
    config
}
