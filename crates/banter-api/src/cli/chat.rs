//! Interactive chat session (the terminal client view).
//!
//! Keeps two message sources: the server-confirmed history fetched once at
//! startup (and again after `/clear`) and a local list of optimistic entries
//! appended as the user types. Rendering merges both, sorted by `created_at`
//! ascending. One send is in flight at a time; while it runs a spinner
//! replaces the prompt, and a failed send appends a fixed local apology so
//! the conversation never stalls visibly.

use banter_core::chat::RequestContext;
use banter_types::message::Message;
use console::style;
use tracing::warn;

use crate::state::AppState;

/// Which side produced a rendered entry. Display-only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sender {
    Me,
    Ai,
}

/// Apology appended locally when a send fails outright.
const SEND_FAILED_APOLOGY: &str = "Sorry, I'm having trouble responding right now.";

/// Merged view over confirmed and optimistic messages.
#[derive(Default)]
struct ChatView {
    confirmed: Vec<Message>,
    local: Vec<(Message, Sender)>,
}

impl ChatView {
    /// All entries, oldest first. Confirmed history carries no sender, so it
    /// renders as the AI side like any unattributed message.
    fn merged(&self) -> Vec<(&Message, Sender)> {
        let mut entries: Vec<(&Message, Sender)> = self
            .confirmed
            .iter()
            .map(|m| (m, Sender::Ai))
            .chain(self.local.iter().map(|(m, s)| (m, *s)))
            .collect();
        entries.sort_by_key(|(m, _)| m.created_at);
        entries
    }

    fn push_local(&mut self, text: &str, sender: Sender) {
        self.local.push((Message::now(text, None), sender));
    }
}

/// Run the interactive chat loop.
pub async fn run(state: &AppState) -> anyhow::Result<()> {
    let mut view = ChatView {
        confirmed: state.chat_service.list().await,
        local: Vec::new(),
    };

    print_banner();
    for (message, sender) in view.merged() {
        print_entry(message, sender);
    }

    loop {
        let line: String = dialoguer::Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()?;
        let text = line.trim().to_string();

        if text.is_empty() {
            continue;
        }

        match text.as_str() {
            "/quit" | "/exit" => break,
            "/clear" => {
                let outcome = state.chat_service.clear().await;
                view.local.clear();
                view.confirmed = state.chat_service.list().await;
                if outcome.success {
                    println!("  {} Conversation cleared.", style("✓").green());
                } else {
                    println!(
                        "  {} {}",
                        style("✗").red(),
                        outcome.error.as_deref().unwrap_or("Failed to clear chat")
                    );
                }
                continue;
            }
            _ => {}
        }

        view.push_local(&text, Sender::Me);

        // Thinking spinner; input stays closed until the send resolves
        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message("thinking...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));

        let sent = state
            .chat_service
            .send(&RequestContext::anonymous(), &text)
            .await;

        spinner.finish_and_clear();

        let reply = match sent {
            Ok(outcome) => outcome.reply,
            Err(err) => {
                warn!(%err, "send failed, appending local apology");
                SEND_FAILED_APOLOGY.to_string()
            }
        };

        let reply_message = Message::now(reply, None);
        print_entry(&reply_message, Sender::Ai);
        view.local.push((reply_message, Sender::Ai));
    }

    println!("\n  Goodbye.");
    Ok(())
}

fn print_banner() {
    println!();
    println!(
        "  {} {}",
        style("banter").cyan().bold(),
        style("-- type a message; /clear restarts, /quit leaves").dim()
    );
    println!();
}

fn print_entry(message: &Message, sender: Sender) {
    let label = match sender {
        Sender::Me => style("you").green().bold(),
        Sender::Ai => style("ai ").cyan().bold(),
    };
    let time = message.created_at.format("%H:%M");
    println!("  {} {} {}", label, style(time).dim(), message.text);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
