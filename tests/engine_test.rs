// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Discovery Engine Tests
 * Merge semantics, dedup and failure containment across sources
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::collections::HashSet;
use std::sync::Arc;

use tuntosarvi::engine::Engine;
use tuntosarvi::errors::SourceError;
use tuntosarvi::http_client::HttpClient;
use tuntosarvi::sources::Source;

struct StaticSource {
    name: &'static str,
    names: &'static [&'static str],
}

#[async_trait::async_trait]
impl Source for StaticSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(
        &self,
        _client: &HttpClient,
        _domain: &str,
    ) -> Result<Vec<String>, SourceError> {
        Ok(self.names.iter().map(|name| name.to_string()).collect())
    }
}

struct FailingSource {
    name: &'static str,
}

#[async_trait::async_trait]
impl Source for FailingSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(
        &self,
        _client: &HttpClient,
        _domain: &str,
    ) -> Result<Vec<String>, SourceError> {
        Err(SourceError::Status {
            status: 503,
            url: format!("https://{}.invalid/", self.name),
        })
    }
}

fn engine(sources: Vec<Arc<dyn Source>>) -> Engine {
    Engine::new(Arc::new(HttpClient::new(5).unwrap()), sources)
}

async fn run_collecting(engine: &Engine) -> (Vec<String>, tuntosarvi::engine::RunStats) {
    let mut emitted = Vec::new();
    let stats = engine.run("example.com", |name| emitted.push(name)).await;
    (emitted, stats)
}

#[tokio::test]
async fn single_source_order_is_preserved() {
    let engine = engine(vec![Arc::new(StaticSource {
        name: "only",
        names: &["a.example.com", "b.example.com", "c.example.com"],
    })]);

    let (emitted, stats) = run_collecting(&engine).await;

    assert_eq!(emitted, ["a.example.com", "b.example.com", "c.example.com"]);
    assert_eq!(stats.unique, 3);
    assert!(stats.failures.is_empty());
}

#[tokio::test]
async fn merged_output_covers_every_source() {
    let engine = engine(vec![
        Arc::new(StaticSource {
            name: "one",
            names: &["a.example.com", "b.example.com"],
        }),
        Arc::new(StaticSource {
            name: "two",
            names: &["c.example.com"],
        }),
        Arc::new(StaticSource {
            name: "three",
            names: &["d.example.com", "e.example.com"],
        }),
    ]);

    let (emitted, stats) = run_collecting(&engine).await;

    let expected: HashSet<&str> = [
        "a.example.com",
        "b.example.com",
        "c.example.com",
        "d.example.com",
        "e.example.com",
    ]
    .into();
    let produced: HashSet<&str> = emitted.iter().map(String::as_str).collect();

    assert_eq!(produced, expected);
    assert_eq!(emitted.len(), 5);
    assert_eq!(stats.unique, 5);
}

#[tokio::test]
async fn names_seen_by_several_sources_are_emitted_once() {
    let engine = engine(vec![
        Arc::new(StaticSource {
            name: "one",
            names: &["www.example.com", "api.example.com"],
        }),
        Arc::new(StaticSource {
            name: "two",
            names: &["*.www.Example.com", "api.example.com", "dev.example.com"],
        }),
    ]);

    let (emitted, stats) = run_collecting(&engine).await;

    let produced: HashSet<&str> = emitted.iter().map(String::as_str).collect();
    let expected: HashSet<&str> = ["www.example.com", "api.example.com", "dev.example.com"].into();

    assert_eq!(produced, expected);
    assert_eq!(emitted.len(), 3);
    assert_eq!(stats.unique, 3);
}

#[tokio::test]
async fn failing_source_never_suppresses_the_others() {
    let engine = engine(vec![
        Arc::new(StaticSource {
            name: "source-one",
            names: &["a.example.com", "b.example.com"],
        }) as Arc<dyn Source>,
        Arc::new(FailingSource { name: "source-two" }),
        Arc::new(StaticSource {
            name: "source-three",
            names: &["c.example.com", "d.example.com"],
        }),
    ]);

    let (emitted, stats) = run_collecting(&engine).await;

    let produced: HashSet<&str> = emitted.iter().map(String::as_str).collect();
    let expected: HashSet<&str> = [
        "a.example.com",
        "b.example.com",
        "c.example.com",
        "d.example.com",
    ]
    .into();

    assert_eq!(produced, expected);
    assert_eq!(stats.unique, 4);
    assert_eq!(stats.failures.len(), 1);
    assert_eq!(stats.failures[0].source, "source-two");
}

#[tokio::test]
async fn all_sources_failing_still_completes_cleanly() {
    let engine = engine(vec![
        Arc::new(FailingSource { name: "one" }) as Arc<dyn Source>,
        Arc::new(FailingSource { name: "two" }),
    ]);

    let (emitted, stats) = run_collecting(&engine).await;

    assert!(emitted.is_empty());
    assert_eq!(stats.unique, 0);
    assert_eq!(stats.failures.len(), 2);
}

#[tokio::test]
async fn empty_source_set_yields_nothing() {
    let engine = engine(Vec::new());

    let (emitted, stats) = run_collecting(&engine).await;

    assert!(emitted.is_empty());
    assert_eq!(stats.unique, 0);
    assert!(stats.failures.is_empty());
}
