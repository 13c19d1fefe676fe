// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::errors::SourceError;
use crate::http_client::HttpClient;
use crate::sources::Source;

/// HackerTarget host search API. Line-oriented `host,ip` text; lines
/// without exactly two fields are skipped.
pub struct HackerTarget {
    base_url: String,
}

impl HackerTarget {
    pub fn new() -> Self {
        Self::with_base_url("https://api.hackertarget.com")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for HackerTarget {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Source for HackerTarget {
    fn name(&self) -> &'static str {
        "hackertarget"
    }

    async fn fetch(&self, client: &HttpClient, domain: &str) -> Result<Vec<String>, SourceError> {
        let url = format!("{}/hostsearch/?q={}", self.base_url, domain);
        let body = client.get(&url).await?;

        let mut out = Vec::new();
        for line in body.lines() {
            let mut fields = line.splitn(2, ',');
            if let (Some(host), Some(_ip)) = (fields.next(), fields.next()) {
                out.push(host.to_string());
            }
        }

        Ok(out)
    }
}
