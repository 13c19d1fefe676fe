// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::Deserialize;

use crate::errors::SourceError;
use crate::http_client::HttpClient;
use crate::sources::Source;

/// One crt.sh log entry. `name_value` may hold several names separated
/// by newlines; it is forwarded verbatim.
#[derive(Debug, Deserialize)]
struct CrtShEntry {
    #[serde(default)]
    name_value: String,
}

/// crt.sh certificate transparency search. The endpoint answers with a
/// stream of concatenated JSON values.
pub struct CrtSh {
    base_url: String,
}

impl CrtSh {
    pub fn new() -> Self {
        Self::with_base_url("https://crt.sh")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for CrtSh {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Source for CrtSh {
    fn name(&self) -> &'static str {
        "crtsh"
    }

    async fn fetch(&self, client: &HttpClient, domain: &str) -> Result<Vec<String>, SourceError> {
        let url = format!("{}/?q=%25.{}&output=json", self.base_url, domain);
        let body = client.get(&url).await?;

        // Streaming decode: stop at the first value that fails to parse,
        // end-of-stream included, and keep everything decoded so far.
        let mut out = Vec::new();
        let mut stream = serde_json::Deserializer::from_str(&body).into_iter::<CrtShEntry>();
        while let Some(Ok(entry)) = stream.next() {
            out.push(entry.name_value);
        }

        Ok(out)
    }
}
