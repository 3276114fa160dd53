//! Console front end: reads newline-delimited JSON updates from stdin and
//! writes the bot's deliveries to stdout as JSON lines. Logs go to stderr.
//!
//! Updates are processed strictly one at a time. One process per storage
//! root; the file store does no cross-process locking.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use secret_santa_bot::adapters::{
    ConsoleOutput, InMemoryDialogStore, JsonFileStore, StaticChatAuthority,
};
use secret_santa_bot::application::{BotContext, Router, Update};
use secret_santa_bot::config::{AppConfig, LogFormat, LoggingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    init_tracing(&config.logging)?;

    let store = Arc::new(JsonFileStore::new(&config.storage.root_dir));
    let ctx = BotContext::new(
        store.clone(),
        store,
        Arc::new(ConsoleOutput::stdout()),
        Arc::new(StaticChatAuthority::new(config.bot.admins()?)),
    );
    let router = Router::new(ctx, Arc::new(InMemoryDialogStore::new()), &config.bot.name);

    info!(
        bot = %config.bot.name,
        root = %config.storage.root_dir.display(),
        "Secret Santa bot ready, reading updates from stdin"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Update>(&line) {
            Ok(update) => router.handle(update).await,
            Err(e) => warn!(error = %e, "Skipping malformed update"),
        }
    }

    info!("Input closed, shutting down");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
    Ok(())
}
