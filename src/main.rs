use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use paideia::{config, server, AppState};

#[derive(Parser)]
#[command(name = "paideia", about = "Topic, quiz, and flashcard service", version)]
struct Cli {
    /// Directory holding the content and mastery JSON files
    #[arg(long, default_value = config::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = config::DEFAULT_BIND_ADDR)]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let state = Arc::new(AppState::new(cli.data_dir)?);
    let server = server::start(&cli.bind, state).await?;

    tokio::signal::ctrl_c().await?;
    log::info!("Received Ctrl-C, stopping");
    server.shutdown().await;

    Ok(())
}
