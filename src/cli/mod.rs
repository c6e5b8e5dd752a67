//! CLI argument parsing using clap 4.x derive macros

use clap::{Parser, Subcommand};

/// An interactive test console for a remote question-answering agent
///
/// Questions typed at the prompt are forwarded to the configured agent
/// gateway and the answers come back rendered with clickable links.
#[derive(Parser, Debug)]
#[command(name = "askterm")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Direct question (alternative to the 'ask' subcommand)
    #[arg(num_args = 1..)]
    pub question: Vec<String>,

    /// Endpoint name to use (overrides the configured default)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Print version information
    #[arg(long)]
    pub version: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a single question and print the answer
    Ask {
        /// The question for the agent
        question: String,
    },

    /// Interactive configuration setup
    Setup,

    /// List configured endpoints
    Endpoints,
}
