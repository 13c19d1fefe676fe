// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Discovery Engine
 * Concurrent source fan-out with a single merged result stream
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::errors::SourceFailure;
use crate::http_client::HttpClient;
use crate::sink::DedupSink;
use crate::sources::Source;

/// Outcome of one discovery run.
#[derive(Debug)]
pub struct RunStats {
    /// Unique normalized names emitted
    pub unique: usize,
    /// Sources that failed, in reporting order
    pub failures: Vec<SourceFailure>,
}

/// Runs every registered source concurrently against one domain and
/// funnels their output through a shared merge channel into the
/// deduplicating sink. The engine itself does no normalization or
/// deduplication.
pub struct Engine {
    client: Arc<HttpClient>,
    sources: Vec<Arc<dyn Source>>,
}

impl Engine {
    pub fn new(client: Arc<HttpClient>, sources: Vec<Arc<dyn Source>>) -> Self {
        Self { client, sources }
    }

    /// Fan out one task per source, then drain the merged stream through
    /// `emit` until every task has finished. A failing source is reported
    /// on a side channel and contributes zero names; it never aborts its
    /// siblings. Names already forwarded are never rolled back.
    pub async fn run<F>(&self, domain: &str, emit: F) -> RunStats
    where
        F: FnMut(String),
    {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let (failure_tx, mut failure_rx) = mpsc::unbounded_channel::<SourceFailure>();

        info!("querying {} sources for {}", self.sources.len(), domain);

        for source in &self.sources {
            let source = Arc::clone(source);
            let client = Arc::clone(&self.client);
            let tx = tx.clone();
            let failure_tx = failure_tx.clone();
            let domain = domain.to_string();

            tokio::spawn(async move {
                match source.fetch(&client, &domain).await {
                    Ok(names) => {
                        debug!("{}: {} names", source.name(), names.len());
                        for name in names {
                            // Receiver gone means the run was abandoned
                            if tx.send(name).is_err() {
                                return;
                            }
                        }
                    }
                    Err(error) => {
                        let _ = failure_tx.send(SourceFailure {
                            source: source.name(),
                            error,
                        });
                    }
                }
            });
        }

        // The channels close once the last task drops its handles; the
        // clones above are the only senders left after these drops.
        drop(tx);
        drop(failure_tx);

        // Failure reporting runs independently so it never blocks emission.
        let reporter = tokio::spawn(async move {
            let mut failures = Vec::new();
            while let Some(failure) = failure_rx.recv().await {
                error!("{}: {}", failure.source, failure.error);
                failures.push(failure);
            }
            failures
        });

        let mut sink = DedupSink::new();
        let unique = sink.drain(rx, emit).await;
        let failures = reporter.await.unwrap_or_default();

        RunStats { unique, failures }
    }
}
