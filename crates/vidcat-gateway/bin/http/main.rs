mod cli;

use crate::cli::{IdStrategyArg, CLI};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use vidcat_catalog::CatalogService;
use vidcat_core::Catalog;
use vidcat_gateway::{App, AppState};
use vidcat_generator::{Generator, SeqGenerator, TimestampGenerator};
use vidcat_storage::InMemoryRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;

    vidcat_telemetry::init(config.log_format.into())?;

    let generator: Box<dyn Generator> = match config.id_strategy {
        IdStrategyArg::Timestamp => Box::new(TimestampGenerator::new()),
        IdStrategyArg::Sequential => Box::new(SeqGenerator::new()),
    };
    let catalog: Arc<dyn Catalog> =
        Arc::new(CatalogService::new(InMemoryRepository::new(), generator));
    let router = App::router_with_base_path(AppState::new(catalog), &config.base_path);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        base_path = %config.base_path,
        id_strategy = %config.id_strategy,
        "starting gateway server"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}
