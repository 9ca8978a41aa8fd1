use diary_rs::api::DiaryServer;
use diary_rs::config::Config;
use diary_rs::diary::DiaryStore;
use diary_rs::logging;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = Config::load(&config_path)?;
    logging::init(&config.logging)?;

    info!("Starting diary-rs v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded from {} (if present)", config_path);
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Database: {}", config.storage.database_url);

    let store = DiaryStore::connect(&config.storage.database_url).await?;
    info!("Diary store ready ({} entries)", store.count_entries().await?);

    let server = DiaryServer::new(store, &config);
    server.run().await?;

    Ok(())
}
