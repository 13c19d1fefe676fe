// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Deduplicating Sink
 * Single consumer of the merge channel: normalize, dedup, emit
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::collections::HashSet;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::normalize::normalize;

/// Streams unique normalized names out of the merge channel in
/// first-observed order. The seen-set is owned by this single consumer,
/// so it needs no locking.
pub struct DedupSink {
    seen: HashSet<String>,
}

impl DedupSink {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Consume the channel until every producer has finished, emitting
    /// each distinct normalized name the moment it is first observed.
    /// Returns the number of unique names emitted.
    pub async fn drain<F>(&mut self, mut rx: UnboundedReceiver<String>, mut emit: F) -> usize
    where
        F: FnMut(String),
    {
        while let Some(raw) = rx.recv().await {
            let name = normalize(&raw);
            if self.seen.insert(name.clone()) {
                emit(name);
            }
        }
        self.seen.len()
    }
}

impl Default for DedupSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    async fn drain_all(raws: &[&str]) -> Vec<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        for raw in raws {
            tx.send(raw.to_string()).unwrap();
        }
        drop(tx);

        let mut emitted = Vec::new();
        let mut sink = DedupSink::new();
        let unique = sink.drain(rx, |name| emitted.push(name)).await;
        assert_eq!(unique, emitted.len());
        emitted
    }

    #[tokio::test]
    async fn emits_each_distinct_name_once_in_arrival_order() {
        let emitted = drain_all(&["a.example.com", "b.example.com", "a.example.com"]).await;
        assert_eq!(emitted, ["a.example.com", "b.example.com"]);
    }

    #[tokio::test]
    async fn variants_that_normalize_identically_collapse() {
        let emitted = drain_all(&[
            "www.Example.com",
            "*.www.example.com",
            ".www.example.com",
            "%www.example.com",
        ])
        .await;
        assert_eq!(emitted, ["www.example.com"]);
    }

    #[tokio::test]
    async fn first_observation_wins_for_emission_order() {
        let emitted = drain_all(&["B.test", "a.test", "b.Test", "c.test"]).await;
        assert_eq!(emitted, ["b.test", "a.test", "c.test"]);
    }
}
