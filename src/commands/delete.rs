use crate::{
    commands::resolve_task_id,
    libs::messages::Message,
    msg_success,
    store::tasks::TaskStore,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id, or a unique prefix of one
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut store = TaskStore::new()?;

    let Some(id) = resolve_task_id(store.all(), &args.id) else {
        return Ok(());
    };

    let title = store.get(&id).map(|t| t.title.clone()).unwrap_or_else(|| id.clone());
    if store.delete(&id)? {
        msg_success!(Message::TaskDeleted(title));
    }

    Ok(())
}
