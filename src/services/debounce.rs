// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Coalesce rapid search input into one recomputation per quiet period.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Sender side of a debounced input stream.
///
/// Each quiet period of `delay` after the last input delivers only the most
/// recent value to the handler. Dropping the debouncer flushes any pending
/// value and stops the worker.
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    worker: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(delay: Duration, mut handler: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();

        let worker = tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                loop {
                    match tokio::time::timeout(delay, rx.recv()).await {
                        Ok(Some(next)) => latest = next,
                        // Channel closed: deliver what we have and stop
                        Ok(None) => {
                            handler(latest);
                            return;
                        }
                        Err(_) => break,
                    }
                }
                handler(latest);
            }
        });

        Self { tx, worker }
    }

    /// Queue a value. Returns false if the worker has stopped.
    pub fn push(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }

    /// Close the input and wait for the last value to be handled.
    pub async fn finish(self) {
        drop(self.tx);
        if let Err(e) = self.worker.await {
            tracing::warn!(error = %e, "Debounce worker ended abnormally");
        }
    }
}
