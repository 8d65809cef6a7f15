mod domain;
mod clients;
mod auth;
mod config;
mod dialog;
mod error;
mod menu;
mod profile;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod user_actor;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use crate::app_system::{setup_tracing, Backend, ProfileSystem};
use crate::auth::AuthService;
use crate::config::Cli;
use crate::dialog::TerminalDialog;
use crate::profile::{ActionOutcome, Notices, ProfileScreen};

#[tokio::main]
async fn main() {
    match run().await {
        Ok(ActionOutcome::Failed) => process::exit(1),
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}

async fn run() -> Result<ActionOutcome> {
    let cli = Cli::parse();

    // Setup tracing once for the entire application
    setup_tracing(&cli.log_level);

    let auth = Arc::new(AuthService::new(cli.token.clone()));
    let backend = cli.backend();
    if matches!(backend, Backend::Remote(_)) && !auth.is_authenticated().await {
        warn!("No API token configured, requests will be sent unauthenticated");
    }

    let system = ProfileSystem::start(backend, auth)
        .await
        .context("failed to start the profile backend")?;

    let mut screen = ProfileScreen::new(
        system.user_info.clone(),
        Arc::new(TerminalDialog::new()),
        Notices::new(cli.locale),
    );

    let outcome = match cli.command {
        Some(command) => {
            info!(?command, "Running command");
            menu::run_command(&mut screen, command).await
        }
        None => {
            if let Err(e) = menu::run_interactive(&mut screen).await {
                error!(error = %e, "Interactive session ended with an error");
            }
            ActionOutcome::Completed
        }
    };

    drop(screen);
    system.shutdown().await.context("failed to stop the profile backend")?;

    Ok(outcome)
}
