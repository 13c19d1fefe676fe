// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::Deserialize;

use crate::errors::SourceError;
use crate::http_client::HttpClient;
use crate::sources::Source;

/// CertSpotter certificate entry; only the SAN list matters here.
#[derive(Debug, Deserialize)]
struct CertSpotterEntry {
    #[serde(default)]
    dns_names: Vec<String>,
}

/// Cert Spotter certificate transparency API
pub struct CertSpotter {
    base_url: String,
}

impl CertSpotter {
    pub fn new() -> Self {
        Self::with_base_url("https://certspotter.com")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for CertSpotter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Source for CertSpotter {
    fn name(&self) -> &'static str {
        "certspotter"
    }

    async fn fetch(&self, client: &HttpClient, domain: &str) -> Result<Vec<String>, SourceError> {
        let url = format!("{}/api/v0/certs?domain={}", self.base_url, domain);
        let body = client.get(&url).await?;

        let entries: Vec<CertSpotterEntry> = serde_json::from_str(&body)?;

        let mut out = Vec::new();
        for entry in entries {
            out.extend(entry.dns_names);
        }

        Ok(out)
    }
}
