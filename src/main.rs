//! `askterm` - an interactive terminal console for testing a remote
//! question-answering agent.
//!
//! This binary provides the CLI and prompt loop; all request lifecycle,
//! gateway, and tokenization logic lives in `askterm-core`.

use anyhow::{Context, Result};
use clap::Parser;
use console::Style;

use crate::cli::{Cli, Commands};
use askterm_core::config::Config;
use askterm_core::logger;

mod cli;
mod ui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        let blue = Style::new().blue();
        println!(
            "{} v{} ({})",
            blue.apply_to("askterm"),
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH")
        );
        return Ok(());
    }

    logger::init_default();

    let config = Config::load().context("Failed to load configuration")?;

    match &cli.command {
        Some(Commands::Ask { question }) => {
            ui::one_shot(&config, cli.endpoint.as_deref(), question).await?;
        }

        Some(Commands::Setup) => {
            Config::setup_interactive()?;
        }

        Some(Commands::Endpoints) => {
            for endpoint in &config.endpoints {
                let marker = if endpoint.name == config.default_endpoint {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{} {:<12} {} (timeout {}s)",
                    marker, endpoint.name, endpoint.url, endpoint.timeout_seconds
                );
            }
        }

        None if !cli.question.is_empty() => {
            let question = cli.question.join(" ");
            ui::one_shot(&config, cli.endpoint.as_deref(), &question).await?;
        }

        None => {
            ui::run(&config, cli.endpoint.as_deref()).await?;
        }
    }

    Ok(())
}
