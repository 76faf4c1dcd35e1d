use crate::{
    commands::resolve_task_id,
    libs::messages::Message,
    msg_success,
    store::tasks::TaskStore,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task id, or a unique prefix of one
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let mut store = TaskStore::new()?;

    let Some(id) = resolve_task_id(store.all(), &args.id) else {
        return Ok(());
    };

    if let Some(task) = store.toggle(&id)? {
        if task.completed {
            msg_success!(Message::TaskCompleted(task.title));
        } else {
            msg_success!(Message::TaskReopened(task.title));
        }
    }

    Ok(())
}
