use crate::{
    libs::{messages::Message, task::TaskFrequency},
    msg_info, msg_success,
    store::tasks::TaskStore,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Recurrence cadence
    #[arg(short, long, value_enum, default_value_t = TaskFrequency::Daily)]
    frequency: TaskFrequency,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut store = TaskStore::new()?;

    match store.create(&args.title, args.frequency)? {
        Some(task) => msg_success!(Message::TaskCreated(task.title.clone())),
        None => msg_info!(Message::TaskTitleEmpty),
    }

    Ok(())
}
