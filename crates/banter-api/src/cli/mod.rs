//! CLI command definitions for the `banter` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod message;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with an AI assistant from your terminal, or serve the chat API.
#[derive(Parser)]
#[command(name = "banter", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Start an interactive chat session.
    Chat,

    /// Send a single message and print the reply.
    Send {
        /// Message text (1-4000 characters).
        text: String,
    },

    /// List the most recent messages.
    #[command(alias = "ls")]
    List,

    /// Delete the entire conversation history.
    Clear {
        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
