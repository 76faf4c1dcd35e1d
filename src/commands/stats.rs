use crate::{
    libs::{messages::Message, stats, view::View},
    msg_info, msg_print,
    store::tasks::TaskStore,
};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let store = TaskStore::new()?;
    if store.all().is_empty() {
        msg_info!(Message::NoTasksYet);
        return Ok(());
    }

    msg_print!(Message::AnalyticsHeader, true);
    View::stats(&stats::global_stats(store.all()))?;

    msg_print!(Message::VelocityHeader, true);
    View::velocity(&stats::velocity(store.all(), Local::now().date_naive()))?;

    Ok(())
}
