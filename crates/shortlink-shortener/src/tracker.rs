use shortlink_core::{LinkStore, ShortCode};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, error, trace};

/// Counts visits in the background.
///
/// Codes submitted through [`track`](VisitTracker::track) go into an
/// unbounded queue drained by one detached worker task that owns its own
/// handle to the store. The worker is not tied to the request that submitted
/// the visit, so dropping that request does not cancel the increment.
/// `track` never waits and never discards a visit while the tracker runs.
#[derive(Debug)]
pub struct VisitTracker {
    sender: mpsc::UnboundedSender<ShortCode>,
    shutdown: Arc<Notify>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl VisitTracker {
    /// Starts the worker task. Must be called from within a tokio runtime.
    pub fn spawn<S: LinkStore>(store: Arc<S>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let shutdown = Arc::new(Notify::new());
        let worker = tokio::spawn(run_worker(store, receiver, Arc::clone(&shutdown)));

        Self {
            sender,
            shutdown,
            worker: Mutex::new(Some(worker)),
        }
    }

    /// Queues one visit for `code` without waiting for it to be recorded.
    pub fn track(&self, code: ShortCode) {
        if let Err(rejected) = self.sender.send(code) {
            debug!(code = %rejected.0, "visit tracker is shut down, dropping visit");
        }
    }

    /// Stops accepting visits, records everything already queued and waits
    /// for the worker to exit. Later calls return immediately.
    pub async fn shutdown(&self) {
        self.shutdown.notify_one();

        let Some(worker) = self.worker.lock().await.take() else {
            return;
        };
        if let Err(err) = worker.await {
            error!(error = %err, "visit tracker worker terminated abnormally");
        }
    }
}

async fn run_worker<S: LinkStore>(
    store: Arc<S>,
    mut receiver: mpsc::UnboundedReceiver<ShortCode>,
    shutdown: Arc<Notify>,
) {
    let mut draining = false;

    loop {
        tokio::select! {
            next = receiver.recv() => {
                let Some(code) = next else { break };
                record_visit(store.as_ref(), &code).await;
            }
            _ = shutdown.notified(), if !draining => {
                // buffered codes are still delivered after close
                draining = true;
                receiver.close();
            }
        }
    }

    debug!("visit tracker stopped");
}

async fn record_visit<S: LinkStore>(store: &S, code: &ShortCode) {
    match store.increment_visit_count(code.as_str()).await {
        Ok(()) => trace!(code = %code, "visit recorded"),
        Err(err) => error!(code = %code, error = %err, "failed to increment visit count"),
    }
}
