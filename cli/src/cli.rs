use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Manage todos on a remote todo service")]
pub struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Service base URL (overrides config and TODO_API_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all todos
    List,
    /// Add a new todo
    Add {
        title: String,
        description: String,
    },
    /// Edit an existing todo
    Edit {
        /// Todo id
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a todo after confirmation
    Delete {
        /// Todo id
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

impl Command {
    /// Whether the command cannot run without the current list.
    /// `add` and `delete` go ahead even if the startup load failed.
    pub fn needs_items(&self) -> bool {
        matches!(self, Command::List | Command::Edit { .. })
    }
}
