use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use shortlink_core::CodeGenerator;
use shortlink_gateway::cli::{Cli, GeneratorArg};
use shortlink_gateway::lifecycle::{drain_and_close, shutdown_signal};
use shortlink_gateway::{App, AppState};
use shortlink_generator::{DigestGenerator, SeqGenerator};
use shortlink_shortener::LinkService;
use shortlink_storage::InMemoryLinkStore;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();
    shortlink_telemetry::init(config.log_format.into()).context("failed to initialise logging")?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        generator = %config.generator,
        "starting shortlink gateway"
    );

    let kind = config.generator;
    match kind {
        GeneratorArg::Digest => run(config, DigestGenerator::new()).await,
        GeneratorArg::Sequential => {
            let generator = SeqGenerator::with_prefix(config.generator_prefix.clone());
            run(config, generator).await
        }
    }
}

async fn run<G: CodeGenerator>(config: Cli, generator: G) -> anyhow::Result<()> {
    let store = Arc::new(InMemoryLinkStore::new());
    let service = Arc::new(LinkService::new(
        Arc::clone(&store),
        generator,
        config.service_config(),
    ));

    let state = AppState::new(service.clone(), config.base_url.clone());
    let served = serve(config.listen_addr, App::router(state)).await;

    // runs on every exit path, including a failed bind
    drain_and_close(service.as_ref(), store.as_ref(), config.shutdown_timeout()).await;
    info!("gateway stopped");

    served
}

async fn serve(listen_addr: SocketAddr, router: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")
}
