pub mod add;
pub mod delete;
pub mod init;
pub mod insight;
pub mod list;
pub mod stats;
pub mod toggle;

use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_error;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks for a cadence")]
    List(list::ListArgs),
    #[command(about = "Toggle task completion")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show completion analytics")]
    Stats,
    #[command(about = "Generate an AI productivity insight")]
    Insight,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        if crate::libs::messages::macros::is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Stats => stats::cmd(),
            Commands::Insight => insight::cmd().await,
        }
    }
}

/// Resolves a user-supplied id or unique id prefix to a full task id.
///
/// Prints the appropriate notice and returns `None` when nothing (or more
/// than one task) matches.
pub(crate) fn resolve_task_id(tasks: &[Task], needle: &str) -> Option<String> {
    if tasks.iter().any(|t| t.id == needle) {
        return Some(needle.to_string());
    }
    let matches: Vec<&Task> = tasks.iter().filter(|t| t.id.starts_with(needle)).collect();
    match matches.as_slice() {
        [task] => Some(task.id.clone()),
        [] => {
            msg_error!(Message::TaskNotFound(needle.to_string()));
            None
        }
        _ => {
            msg_error!(Message::AmbiguousTaskId(needle.to_string()));
            None
        }
    }
}
