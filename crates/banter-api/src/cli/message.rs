//! One-shot message commands (send, list, clear).

use banter_core::chat::RequestContext;
use console::style;

use crate::state::AppState;

/// `banter send TEXT` - send one message and print the reply.
pub async fn send(state: &AppState, text: &str, json: bool) -> anyhow::Result<()> {
    let outcome = state
        .chat_service
        .send(&RequestContext::anonymous(), text)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!();
        println!("  {} {}", style("ai").cyan().bold(), outcome.reply);
        println!();
    }

    Ok(())
}

/// `banter list` - print the most recent messages, oldest first.
pub async fn list(state: &AppState, json: bool) -> anyhow::Result<()> {
    let mut messages = state.chat_service.list().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }

    if messages.is_empty() {
        println!();
        println!(
            "  {}",
            style("No messages yet. Say hello with `banter send`.").dim()
        );
        println!();
        return Ok(());
    }

    // Fetched newest-first; read top to bottom like a conversation
    messages.reverse();

    let mut table = comfy_table::Table::new();
    table.set_header(vec!["time", "text"]);
    for msg in &messages {
        table.add_row(vec![
            msg.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            msg.text.clone(),
        ]);
    }
    println!("{table}");

    Ok(())
}

/// `banter clear` - wipe the conversation history.
pub async fn clear(state: &AppState, force: bool, json: bool) -> anyhow::Result<()> {
    if !force && !json {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt("Delete the entire conversation history?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  Aborted.");
            return Ok(());
        }
    }

    let outcome = state.chat_service.clear().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.success {
        println!("  {} Chat history cleared.", style("✓").green());
    } else {
        println!(
            "  {} {}",
            style("✗").red(),
            outcome.error.as_deref().unwrap_or("Failed to clear chat")
        );
    }

    Ok(())
}
