//! Chat session orchestration.
//!
//! Runs the session end to end: resolve the session gate, print the banner
//! and welcome message, then loop on input. Each accepted submission goes
//! out as one request while a spinner runs; the reply (or the fallback line
//! for a failed turn) is rendered as the assistant's message.

use std::time::{Duration, Instant};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use neurochat_core::backend::ChatBackend;
use neurochat_core::conversation::Conversation;
use neurochat_core::gate::SessionGate;

use crate::backend::HttpChatBackend;

use super::banner::print_welcome_banner;
use super::commands::{self, SlashCommand};
use super::input::{ChatPrompt, InputEvent};
use super::login;
use super::renderer::ReplyRenderer;

/// Run the interactive chat session against the given endpoint.
pub async fn run_chat(endpoint: String) -> anyhow::Result<()> {
    let mut gate = SessionGate::new();
    let codename = login::prompt_codename(&mut gate)?;

    let backend = HttpChatBackend::new(endpoint);
    print_welcome_banner(&codename, backend.endpoint());

    let renderer = ReplyRenderer::new();
    let mut conversation = Conversation::new();

    // The synthetic welcome message opens the transcript.
    if let Some(welcome) = conversation.messages().first() {
        print_reply(&renderer, &welcome.text);
    }

    let prompt = format!("  {} ", style(format!("{codename} >")).green().bold());
    let (mut input, _writer) =
        ChatPrompt::new(prompt).map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        match input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Link closed.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
            }
            InputEvent::Line(text) => {
                if let Some(command) = commands::parse(&text) {
                    match command {
                        SlashCommand::Help => commands::print_help(),
                        SlashCommand::History => print_history(&conversation, &codename),
                        SlashCommand::Clear => input.clear(),
                        SlashCommand::Exit => {
                            println!("\n  {}", style("Link closed.").dim());
                            break;
                        }
                        SlashCommand::Unknown(name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                let Some(outbound) = conversation.begin(&text) else {
                    continue;
                };

                let spinner = thinking_spinner();
                let started = Instant::now();
                let result = backend.send(&outbound.message, &outbound.history).await;
                spinner.finish_and_clear();

                let reply = conversation.finish(result);
                info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "turn completed"
                );

                print_reply(&renderer, &reply.text);
            }
        }
    }

    Ok(())
}

/// Spinner shown while a request is in flight.
fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("PROCESSING DATA STREAM...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Render an assistant message under its label.
fn print_reply(renderer: &ReplyRenderer, text: &str) {
    println!("\n  {}", style("CORE AI").cyan().bold());
    print!("{}", renderer.render(text));
    println!();
}

/// Print the transcript so far, role-labeled with HH:MM timestamps.
fn print_history(conversation: &Conversation, codename: &str) {
    println!();
    for message in conversation.messages() {
        let label = if message.author.is_user() {
            format!("{}", style(codename).green().bold())
        } else {
            format!("{}", style("CORE AI").cyan().bold())
        };
        let clock = message
            .timestamp
            .with_timezone(&chrono::Local)
            .format("%H:%M");
        let preview: String = if message.text.chars().count() > 100 {
            let head: String = message.text.chars().take(97).collect();
            format!("{head}...")
        } else {
            message.text.clone()
        };
        println!("  {} {label} {preview}", style(clock).dim());
    }
    println!();
}
