// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::Deserialize;

use crate::errors::SourceError;
use crate::http_client::HttpClient;
use crate::sources::Source;

/// ThreatCrowd domain report response
#[derive(Debug, Deserialize)]
struct ThreatCrowdResponse {
    #[serde(default)]
    subdomains: Vec<String>,
}

/// ThreatCrowd passive DNS API
pub struct ThreatCrowd {
    base_url: String,
}

impl ThreatCrowd {
    pub fn new() -> Self {
        Self::with_base_url("https://www.threatcrowd.org")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ThreatCrowd {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Source for ThreatCrowd {
    fn name(&self) -> &'static str {
        "threatcrowd"
    }

    async fn fetch(&self, client: &HttpClient, domain: &str) -> Result<Vec<String>, SourceError> {
        let url = format!(
            "{}/searchApi/v2/domain/report/?domain={}",
            self.base_url, domain
        );
        let body = client.get(&url).await?;

        let report: ThreatCrowdResponse = serde_json::from_str(&body)?;

        Ok(report.subdomains)
    }
}
