// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use std::env;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Per-request HTTP timeout so a hung source cannot stall the run
    pub timeout_secs: u64,
    /// Facebook Graph API credentials for the certificate query source
    pub facebook: Option<FacebookCredentials>,
}

#[derive(Debug, Clone)]
pub struct FacebookCredentials {
    pub app_id: String,
    pub app_secret: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            facebook: None,
        }
    }
}

impl RunConfig {
    /// Load configuration from the environment. Credentials are read once
    /// here rather than inside source fetch paths.
    pub fn from_env() -> Self {
        let facebook = match (env::var("FB_APP_ID"), env::var("FB_APP_SECRET")) {
            (Ok(app_id), Ok(app_secret)) if !app_id.is_empty() && !app_secret.is_empty() => {
                Some(FacebookCredentials { app_id, app_secret })
            }
            _ => None,
        };

        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            facebook,
        }
    }
}
