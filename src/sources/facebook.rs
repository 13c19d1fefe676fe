// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::Deserialize;
use tracing::debug;

use crate::config::FacebookCredentials;
use crate::errors::SourceError;
use crate::http_client::HttpClient;
use crate::sources::Source;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct CertificatePage {
    #[serde(default)]
    data: Vec<CertificateEntry>,
    paging: Option<Paging>,
}

#[derive(Debug, Deserialize)]
struct CertificateEntry {
    #[serde(default)]
    domains: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Paging {
    next: Option<String>,
}

/// Facebook Graph API certificate transparency search. Requires app
/// credentials (FB_APP_ID / FB_APP_SECRET); without them the source
/// reports a contained credentials failure.
pub struct Facebook {
    base_url: String,
    credentials: Option<FacebookCredentials>,
}

impl Facebook {
    pub fn new(credentials: Option<FacebookCredentials>) -> Self {
        Self::with_base_url("https://graph.facebook.com", credentials)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        credentials: Option<FacebookCredentials>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }
}

#[async_trait::async_trait]
impl Source for Facebook {
    fn name(&self) -> &'static str {
        "facebook"
    }

    async fn fetch(&self, client: &HttpClient, domain: &str) -> Result<Vec<String>, SourceError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(SourceError::Credentials("FB_APP_ID and FB_APP_SECRET"))?;

        let token_url = format!(
            "{}/oauth/access_token?client_id={}&client_secret={}&grant_type=client_credentials",
            self.base_url, credentials.app_id, credentials.app_secret
        );
        let body = client.get(&token_url).await?;
        let token: TokenResponse = serde_json::from_str(&body)?;

        let mut out = Vec::new();
        let mut url = format!(
            "{}/certificates?fields=domains&access_token={}&query=*.{}",
            self.base_url, token.access_token, domain
        );

        // Follow paging.next until the API stops handing one out
        loop {
            let body = client.get(&url).await?;
            let page: CertificatePage = serde_json::from_str(&body)?;

            for certificate in page.data {
                out.extend(certificate.domains);
            }

            match page.paging.and_then(|paging| paging.next) {
                Some(next) => {
                    debug!("facebook: following next page");
                    url = next;
                }
                None => break,
            }
        }

        Ok(out)
    }
}
