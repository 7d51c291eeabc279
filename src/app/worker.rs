//! Background fetch worker.
//!
//! Owns a tokio runtime on its own thread. Requests arrive over a channel and
//! each runs as a separate task, so a slow request does not hold up the next
//! one. Outcomes are handed back untouched; ordering is the orchestrator's
//! job.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Context as _;
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, error};

use super::orchestrator::{FetchOutcome, FetchRequest, Query};
use crate::error::{FetchError, Result};
use crate::source::{UserRecord, UserSource};

/// Run `query` against `source`.
pub async fn execute(source: &dyn UserSource, query: &Query) -> std::result::Result<Vec<UserRecord>, FetchError> {
    match query {
        Query::Page(page) => source.fetch_page(*page).await,
        Query::Search { .. } => source.fetch_search_pool().await,
        Query::Gender(gender) => source.fetch_by_gender(*gender).await,
    }
}

pub struct FetchWorker {
    requests: Option<Sender<FetchRequest>>,
    outcomes: Receiver<FetchOutcome>,
    handle: Option<JoinHandle<()>>,
}

impl FetchWorker {
    pub fn spawn(source: Arc<dyn UserSource>) -> Result<Self> {
        let (req_tx, req_rx) = crossbeam_channel::unbounded::<FetchRequest>();
        let (out_tx, out_rx) = crossbeam_channel::unbounded::<FetchOutcome>();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("fetch-io")
            .enable_all()
            .build()
            .context("build fetch runtime")?;

        let handle = thread::Builder::new()
            .name("fetch-worker".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    while let Ok(req) = req_rx.recv() {
                        debug!(seq = req.seq, query = ?req.query, "worker: request received");
                        let source = Arc::clone(&source);
                        let out_tx = out_tx.clone();
                        tokio::spawn(async move {
                            let result = execute(source.as_ref(), &req.query).await;
                            let outcome = FetchOutcome { seq: req.seq, query: req.query, result };
                            if out_tx.send(outcome).is_err() {
                                debug!("worker: outcome receiver dropped");
                            }
                        });
                    }
                    debug!("worker: request channel closed");
                });
            })
            .context("spawn fetch worker thread")?;

        Ok(Self { requests: Some(req_tx), outcomes: out_rx, handle: Some(handle) })
    }

    /// Queue a request. If the worker is gone, the request is answered
    /// immediately with [`FetchError::WorkerGone`].
    pub fn submit(&self, req: FetchRequest) -> std::result::Result<(), FetchOutcome> {
        let Some(tx) = self.requests.as_ref() else {
            return Err(gone(req));
        };
        tx.send(req).map_err(|e| {
            error!("fetch worker is not accepting requests");
            gone(e.into_inner())
        })
    }

    /// Outcomes that have arrived so far, without blocking.
    pub fn drain(&self) -> Vec<FetchOutcome> {
        self.outcomes.try_iter().collect()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<FetchOutcome> {
        self.outcomes.recv_timeout(timeout).ok()
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("fetch worker thread panicked");
            }
        }
    }
}

fn gone(req: FetchRequest) -> FetchOutcome {
    FetchOutcome { seq: req.seq, query: req.query, result: Err(FetchError::WorkerGone) }
}
