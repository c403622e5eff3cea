//! Debounced search input.
//!
//! Rapid query edits are coalesced: the fetch handler runs once per burst,
//! with the last value pushed, after a quiet period of `delay`.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::errors::ServiceError;

pub struct SearchDebouncer {
    tx: mpsc::UnboundedSender<String>,
}

impl SearchDebouncer {
    /// Spawn the debounce worker. `handler` is the fetch; its failures are
    /// logged and swallowed, matching how search errors are surfaced (not
    /// retried) elsewhere.
    pub fn spawn<F, Fut>(delay: Duration, handler: F) -> Self
    where
        F: Fn(String) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ServiceError>> + Send,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        tokio::spawn(async move {
            while let Some(first) = rx.recv().await {
                let mut latest = first;
                loop {
                    tokio::select! {
                        next = rx.recv() => match next {
                            Some(v) => latest = v,
                            // Sender gone: still fire for the pending value.
                            None => break,
                        },
                        _ = sleep(delay) => break,
                    }
                }
                debug!(query = %latest, "debounce window elapsed");
                if let Err(e) = handler(latest).await {
                    warn!(error = %e, "search fetch failed");
                }
            }
        });
        Self { tx }
    }

    /// Record a query edit. Returns false once the worker has shut down.
    pub fn push(&self, query: impl Into<String>) -> bool {
        self.tx.send(query.into()).is_ok()
    }
}
