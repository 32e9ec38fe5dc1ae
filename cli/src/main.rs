mod cli;
mod commands;
mod prompt;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use todo_core::{Config, Confirm, FixedAnswer, ReqwestTransport, TodoListController};
use tracing_subscriber::EnvFilter;

use cli::Command;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    init_tracing(args.verbose);

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(url) = args.url {
        config.base_url = url;
    }
    tracing::debug!(base_url = %config.base_url, "using todo service");

    let confirm: Arc<dyn Confirm> = match args.command {
        Command::Delete { yes: true, .. } => Arc::new(FixedAnswer(true)),
        _ => Arc::new(prompt::StdinConfirm),
    };
    let controller = TodoListController::from_config(&config, Arc::new(ReqwestTransport::new()), confirm);
    // The controller has already logged a failed load.
    let loaded = controller.load_items().await;
    if args.command.needs_items() {
        loaded.with_context(|| format!("could not load todos from {}", config.base_url))?;
    }

    let out = &mut std::io::stdout();
    match args.command {
        Command::List => commands::list(&controller, out),
        Command::Add { title, description } => commands::add(&controller, out, title, description).await,
        Command::Edit {
            id,
            title,
            description,
        } => commands::edit(&controller, out, id, title, description).await,
        Command::Delete { id, .. } => commands::delete(&controller, out, id).await,
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}
