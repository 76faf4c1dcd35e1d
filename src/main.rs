use anyhow::Result;
use vrata::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    Cli::menu().await
}
