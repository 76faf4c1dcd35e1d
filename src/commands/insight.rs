use crate::{
    api::insight::{Insight, InsightState},
    libs::{config::Config, messages::Message},
    msg_error, msg_info, msg_print,
    store::tasks::TaskStore,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let store = TaskStore::new()?;

    let mut insight = Insight::new(&config.insight.unwrap_or_default());
    msg_info!(Message::InsightRequested);

    match insight.generate(store.all()).await {
        InsightState::Succeeded(text) => msg_print!(text, true),
        InsightState::Failed(message) => msg_error!(message),
        _ => {}
    }

    Ok(())
}
