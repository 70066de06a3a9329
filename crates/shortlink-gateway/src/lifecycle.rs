use shortlink_core::{CodeGenerator, LinkStore};
use shortlink_shortener::LinkService;
use std::time::Duration;
use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// Resolves when the process is asked to stop (Ctrl+C, or SIGTERM on unix).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}

/// Records pending visits, then closes the store.
///
/// The caller runs this once, after the server has stopped, on every exit
/// path. Each step is bounded by `step_timeout`; failures are logged.
pub async fn drain_and_close<S: LinkStore, G: CodeGenerator>(
    service: &LinkService<S, G>,
    store: &S,
    step_timeout: Duration,
) {
    match timeout(step_timeout, service.shutdown()).await {
        Ok(()) => info!("visit tracker drained"),
        Err(_) => warn!(
            timeout_secs = step_timeout.as_secs(),
            "timed out draining visit tracker"
        ),
    }

    match timeout(step_timeout, store.close()).await {
        Ok(Ok(())) => info!("link store closed"),
        Ok(Err(err)) => error!(error = %err, "failed to close link store"),
        Err(_) => error!(
            timeout_secs = step_timeout.as_secs(),
            "timed out closing link store"
        ),
    }
}
