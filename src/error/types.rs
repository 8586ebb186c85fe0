//! Client-facing error taxonomy

use thiserror::Error;

use crate::services::transport::TransportError;

/// Terminal outcomes of a `generate` call that produced no text.
///
/// Every variant is surfaced verbatim to the caller; there is no fallback
/// text and no silent suppression.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The key pool was empty when the call started; no attempt was made.
    #[error("No API keys available")]
    NoKeys,

    /// Every key was tried once and every failure was retriable.
    #[error("All {attempts} API keys exhausted without a successful response")]
    KeysExhausted { attempts: usize },

    /// A non-retriable upstream failure, surfaced from the attempt that
    /// hit it. No further keys were tried.
    #[error("Upstream request failed: {0}")]
    Upstream(#[source] TransportError),
}
