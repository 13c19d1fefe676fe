// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::errors::SourceError;

const USER_AGENT: &str = concat!("tuntosarvi/", env!("CARGO_PKG_VERSION"));

/// Maximum response body size (10MB) to prevent memory exhaustion
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Thin GET helper shared by every data source: one request, full body
/// back, non-2xx is an error. No retries, no caching.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_body_size: usize,
}

impl HttpClient {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(USER_AGENT)
            .tcp_nodelay(true)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            max_body_size: MAX_BODY_SIZE,
        })
    }

    /// Send a GET request and return the response body.
    pub async fn get(&self, url: &str) -> Result<String, SourceError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body_bytes = response.bytes().await?;
        debug!("GET {} -> {} ({} bytes)", url, status, body_bytes.len());

        // Truncate oversized responses rather than buffering them whole
        let body = if body_bytes.len() > self.max_body_size {
            String::from_utf8_lossy(&body_bytes[..self.max_body_size]).to_string()
        } else {
            String::from_utf8_lossy(&body_bytes).to_string()
        };

        Ok(body)
    }
}
