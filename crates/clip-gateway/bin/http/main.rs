mod cli;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use clip_core::MappingStore;
use clip_gateway::{App, AppState};
use clip_shortener::ShortenerService;
use clip_storage::{MemoryStore, MySqlStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(config.listen_addr, MemoryStore::new()).await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .ok_or("mysql dsn is required when storage backend is mysql")?;
            let store = MySqlStore::connect(&mysql_dsn).await?;
            run_server(config.listen_addr, store).await?;
        }
    }

    Ok(())
}

async fn run_server<S: MappingStore>(
    listen_addr: SocketAddr,
    store: S,
) -> Result<(), Box<dyn std::error::Error>> {
    let shortener = ShortenerService::new(store);
    let state = AppState::new(Arc::new(shortener));

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");
    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
