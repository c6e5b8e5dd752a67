//! Interactive console loop
//!
//! Reads questions at a prompt, pushes them through the lifecycle
//! controller, and renders whatever state the round trip ends in. Input
//! policy (length cap, exit words) lives here; the controller only ever
//! sees questions worth sending.

mod render;

pub use render::render_answer;

use anyhow::{Context, Result};
use console::Style;
use dialoguer::{theme::ColorfulTheme, Input};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedReceiver;

use askterm_core::config::Config;
use askterm_core::gateway::HttpGateway;
use askterm_core::ids::SessionId;
use askterm_core::info_log;
use askterm_core::lifecycle::{LifecycleController, RequestState, SubmitOutcome};

/// Run the interactive console until the user leaves.
pub async fn run(config: &Config, endpoint_override: Option<&str>) -> Result<()> {
    let endpoint = config.resolve_endpoint(endpoint_override)?;
    let session = SessionId::generate();
    info_log!("console {} against {}", session, endpoint.url);

    let gateway = Arc::new(HttpGateway::new(&endpoint)?);
    let (controller, mut transitions) = LifecycleController::new(gateway, session);

    let dim = Style::new().dim();
    println!(
        "Connected to {} ({})",
        Style::new().cyan().apply_to(&endpoint.name),
        endpoint.url
    );
    println!(
        "{}",
        dim.apply_to("Ask anything. `exit` or `quit` leaves the console.")
    );

    let theme = ColorfulTheme::default();
    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read console input")?;
        let question = line.trim();

        if question.is_empty() {
            continue;
        }
        if question == "exit" || question == "quit" {
            break;
        }
        if question.chars().count() > config.console.max_question_chars {
            println!(
                "{}",
                Style::new().yellow().apply_to(format!(
                    "Questions are capped at {} characters; trim it down and try again.",
                    config.console.max_question_chars
                ))
            );
            continue;
        }

        let started = Instant::now();
        match controller.submit(question) {
            SubmitOutcome::Dispatched(_) => {}
            SubmitOutcome::EmptyQuestion => continue,
            SubmitOutcome::AlreadyPending => {
                println!(
                    "{}",
                    Style::new()
                        .yellow()
                        .apply_to("Still waiting on the previous question.")
                );
                continue;
            }
        }

        wait_and_render(&mut transitions, Some(started)).await;
    }

    Ok(())
}

/// Ask a single question, print the outcome, and exit non-zero on failure.
pub async fn one_shot(
    config: &Config,
    endpoint_override: Option<&str>,
    question: &str,
) -> Result<()> {
    let endpoint = config.resolve_endpoint(endpoint_override)?;
    let session = SessionId::generate();
    info_log!("one-shot {} against {}", session, endpoint.url);

    let gateway = Arc::new(HttpGateway::new(&endpoint)?);
    let (controller, mut transitions) = LifecycleController::new(gateway, session);

    match controller.submit(question) {
        SubmitOutcome::Dispatched(_) => {}
        SubmitOutcome::EmptyQuestion => anyhow::bail!("The question is empty"),
        SubmitOutcome::AlreadyPending => anyhow::bail!("A request is already in flight"),
    }

    if !wait_and_render(&mut transitions, None).await {
        std::process::exit(1);
    }
    Ok(())
}

/// Block on the transition channel until the round trip ends, render the
/// outcome, and report whether it succeeded.
async fn wait_and_render(
    transitions: &mut UnboundedReceiver<RequestState>,
    started: Option<Instant>,
) -> bool {
    while let Some(state) = transitions.recv().await {
        match state {
            RequestState::Succeeded { answer } => {
                if let Some(started) = started {
                    let elapsed = started.elapsed().as_millis();
                    println!(
                        "{} {}",
                        Style::new().green().apply_to("agent"),
                        Style::new().dim().apply_to(format!("({elapsed} ms)"))
                    );
                }
                println!("{}", render_answer(&answer, console::colors_enabled()));
                return true;
            }
            RequestState::Failed { message } => {
                eprintln!("{} {}", Style::new().red().apply_to("error:"), message);
                return false;
            }
            RequestState::Idle | RequestState::Pending { .. } => {}
        }
    }
    false
}
