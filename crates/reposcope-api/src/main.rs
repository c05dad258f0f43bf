//! reposcope CLI entry point.
//!
//! Binary name: `rscope`
//!
//! Parses CLI arguments, initializes config and the token chain, then
//! dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, TokenCommand};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,reposcope=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "rscope", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    match cli.command {
        Commands::Repos {
            user,
            query,
            private_only,
            sort,
        } => {
            cli::repos::list_repos(&state, &user, &query, private_only, &sort, cli.json).await?;
        }

        Commands::Token { action } => match action {
            TokenCommand::Set { value } => {
                cli::token::set_token(&state, value.as_deref(), cli.json).await?;
            }
            TokenCommand::Clear => {
                cli::token::clear_token(&state, cli.json).await?;
            }
            TokenCommand::Status => {
                cli::token::token_status(&state, cli.json).await?;
            }
        },

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
