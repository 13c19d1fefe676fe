// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Source Error Types
 * Per-source failure classification with thiserror
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use thiserror::Error;

/// Failure of a single data source. Never fatal to the run: the engine
/// reports it and the source simply contributes zero names.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Network-level failures (connect, TLS, timeout)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx responses from a source endpoint
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Malformed response bodies
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// API credentials required by the source are not configured
    #[error("missing credentials: {0}")]
    Credentials(&'static str),
}

/// A reported failure, tagged with the source that produced it.
#[derive(Debug)]
pub struct SourceFailure {
    pub source: &'static str,
    pub error: SourceError,
}
