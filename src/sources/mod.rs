// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Passive Data Sources
 * One module per public data source, all sharing the Source contract
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod certspotter;
pub mod crtsh;
pub mod facebook;
pub mod hackertarget;
pub mod threatcrowd;

pub use certspotter::CertSpotter;
pub use crtsh::CrtSh;
pub use facebook::Facebook;
pub use hackertarget::HackerTarget;
pub use threatcrowd::ThreatCrowd;

use std::sync::Arc;

use crate::config::RunConfig;
use crate::errors::SourceError;
use crate::http_client::HttpClient;

// ---------------------------------------------------------------------------
// Source trait
// ---------------------------------------------------------------------------

/// A passive subdomain data source. Sources are stateless and
/// independent: one fetch per run, no shared state, no domain syntax
/// validation. A failing source contributes zero names and must never
/// panic or abort its siblings.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Source name for failure reporting and logs
    fn name(&self) -> &'static str;

    /// Query the source for candidate names of `domain`, preserving the
    /// source's own response order. Names are raw: wildcards, mixed case
    /// and URL artifacts are normalized downstream.
    async fn fetch(&self, client: &HttpClient, domain: &str) -> Result<Vec<String>, SourceError>;
}

/// The fixed source registry, constructed once at startup.
pub fn all_sources(config: &RunConfig) -> Vec<Arc<dyn Source>> {
    vec![
        Arc::new(CertSpotter::new()),
        Arc::new(HackerTarget::new()),
        Arc::new(ThreatCrowd::new()),
        Arc::new(CrtSh::new()),
        Arc::new(Facebook::new(config.facebook.clone())),
    ]
}
