use crate::{
    libs::{
        messages::Message,
        stats,
        task::{TaskFilter, TaskFrequency},
        view::View,
    },
    msg_info, msg_print,
    store::tasks::TaskStore,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Cadence tab to display
    #[arg(short, long, value_enum, default_value_t = TaskFrequency::Daily)]
    frequency: TaskFrequency,
    /// Show every task regardless of cadence
    #[arg(short, long)]
    all: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let store = TaskStore::new()?;

    let (header, tasks) = if args.all {
        ("all".to_string(), store.tasks(TaskFilter::All))
    } else {
        (args.frequency.to_string(), store.tasks(TaskFilter::ByFrequency(args.frequency)))
    };

    if tasks.is_empty() {
        msg_info!(Message::NoTasksForFrequency(header));
        return Ok(());
    }

    msg_print!(Message::TasksHeader(header), true);
    View::tasks(&tasks)?;
    msg_print!(Message::CompletionRate(stats::completion_rate(&tasks)));

    Ok(())
}
