//! CLI command definitions and dispatch for the `rscope` binary.
//!
//! Uses clap derive macros for argument parsing. The CLI follows a verb-noun
//! pattern (e.g., `rscope repos u1i`, `rscope token set`).

pub mod repos;
pub mod token;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Browse a user's repositories on a hosted code forge.
#[derive(Parser)]
#[command(name = "rscope", version, about, long_about = None)]
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
    /// List a user's repositories with filtering and sorting.
    #[command(alias = "ls")]
    Repos {
        /// Username, path (`/u1i/...`), or page URL -- the first path
        /// segment is taken as the username.
        user: String,

        /// Keep only repositories matching this text in name, description,
        /// or language (case-insensitive).
        #[arg(short, long, default_value = "")]
        query: String,

        /// Show private repositories only.
        #[arg(long)]
        private_only: bool,

        /// Sort key: created_at-asc, created_at-desc, stars-asc, stars-desc.
        #[arg(short, long, default_value = "created_at-desc")]
        sort: String,
    },

    /// Manage the stored access token.
    Token {
        #[command(subcommand)]
        action: TokenCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum TokenCommand {
    /// Store a personal access token (prompted securely; empty input clears).
    Set {
        /// Token value (optional; prompts if omitted for security).
        #[arg(long)]
        value: Option<String>,
    },

    /// Remove the stored token.
    Clear,

    /// Show whether a token is stored (masked).
    Status,
}
