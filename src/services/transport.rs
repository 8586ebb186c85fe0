//! Transport seam for the downstream text-generation endpoint
//!
//! One `complete` call maps to one request with one credential; retry and
//! rotation live a layer above, in [`crate::client::FailoverClient`].

use async_trait::async_trait;
use thiserror::Error;

use crate::schemas::gemini::GenerationConfig;

/// Errors surfaced by a text-generation transport
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {code} - {message}")]
    Api { code: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Response contained no text")]
    EmptyResponse,

    #[error("Attempt timed out after {secs}s")]
    AttemptTimedOut { secs: u64 },
}

/// A client for one downstream text-generation endpoint.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Issue a single generation request with a single credential.
    ///
    /// The generation config is passed through to the wire unchanged. The
    /// returned string may be empty; the caller decides what that means.
    async fn complete(
        &self,
        api_key: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, TransportError>;
}
