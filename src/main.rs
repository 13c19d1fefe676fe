// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Tuntosarvi - Passive Subdomain Discovery
 * Queries public data sources concurrently and streams unique results
 *
 * (c) 2026 Bountyy Oy
 */

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, Level};

use tuntosarvi::config::{RunConfig, DEFAULT_TIMEOUT_SECS};
use tuntosarvi::engine::Engine;
use tuntosarvi::http_client::HttpClient;
use tuntosarvi::sources;

/// Tuntosarvi - Passive Subdomain Discovery
#[derive(Parser)]
#[command(name = "tuntosarvi")]
#[command(author = "Bountyy Oy <info@bountyy.fi>")]
#[command(version)]
#[command(about = "Find subdomains from public data sources. Fast, passive, Rust.", long_about = None)]
struct Cli {
    /// Target domain to discover subdomains for
    domain: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only report source failures
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    // Logs go to stderr; stdout carries nothing but discovered names
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let domain = match cli.domain {
        Some(domain) if !domain.is_empty() => domain,
        _ => {
            println!("no domain specified");
            return Ok(());
        }
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("tuntosarvi-worker")
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli.timeout, domain))
}

async fn async_main(timeout_secs: u64, domain: String) -> Result<()> {
    let mut config = RunConfig::from_env();
    config.timeout_secs = timeout_secs;

    let client = Arc::new(HttpClient::new(config.timeout_secs)?);
    let engine = Engine::new(client, sources::all_sources(&config));

    let stats = engine.run(&domain, |name| println!("{name}")).await;

    info!(
        "done: {} unique names, {} sources failed",
        stats.unique,
        stats.failures.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn missing_domain_is_handled_by_us_not_clap() {
        let cli = Cli::parse_from(["tuntosarvi"]);
        assert!(cli.domain.is_none());
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
    }
}
