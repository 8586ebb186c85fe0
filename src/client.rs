//! Failover client
//!
//! The rotation-and-retry coordinator. One `generate` call makes at most
//! one pass over the key pool: a retriable failure advances the cursor and
//! burns the next key, a fatal failure aborts immediately, and the loop is
//! bounded by the pool size so a wrapped cursor never revisits a key within
//! the same call.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::config::Settings;
use crate::error::GenerateError;
use crate::schemas::gemini::GenerationConfig;
use crate::services::classify::{classify, FailureKind};
use crate::services::gemini::{GeminiTransport, GeminiTransportConfig};
use crate::services::key_pool::{KeyPool, KeyProvider, StaticKeys};
use crate::services::transport::{TextGenerator, TransportError};
use crate::utils::string::excerpt;
use crate::utils::timeout::{with_timeout, TimeoutError};

// ============================================================================
// Constants
// ============================================================================

/// Sampling temperature passed through to the generation endpoint
const GENERATION_TEMPERATURE: f32 = 0.1;

/// Character cap for prompt excerpts in log fields
const PROMPT_LOG_CHARS: usize = 80;

// ============================================================================
// Request Mode
// ============================================================================

/// Response shape requested from the generation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// Ask the model for a raw JSON document
    StructuredJson,
    /// Ask the model for plain prose
    PlainText,
}

impl RequestMode {
    /// MIME type for the `responseMimeType` generation parameter
    pub fn response_mime_type(self) -> &'static str {
        match self {
            RequestMode::StructuredJson => "application/json",
            RequestMode::PlainText => "text/plain",
        }
    }

    /// Generation parameters for this mode, handed to the transport
    /// unchanged.
    pub fn generation_config(self) -> GenerationConfig {
        GenerationConfig {
            temperature: Some(GENERATION_TEMPERATURE),
            response_mime_type: Some(self.response_mime_type().to_string()),
            ..GenerationConfig::default()
        }
    }
}

// ============================================================================
// Attempt Outcome
// ============================================================================

/// Outcome of a single attempt against a single key
#[derive(Debug)]
enum AttemptOutcome {
    Success(String),
    Retriable(TransportError),
    Fatal(TransportError),
}

// ============================================================================
// Failover Client
// ============================================================================

/// A text-generation client that rotates across an ordered pool of API keys
///
/// Clones share the pool and the transport, so concurrent callers spread
/// load across keys through the shared cursor.
#[derive(Clone)]
pub struct FailoverClient {
    transport: Arc<dyn TextGenerator>,
    pool: Arc<KeyPool>,
    attempt_timeout: Duration,
}

impl FailoverClient {
    /// Create a client from a transport and a key provider.
    ///
    /// The provider is queried at the start of every call, so key-set
    /// changes take effect on the next call.
    pub fn new(
        transport: Arc<dyn TextGenerator>,
        provider: Arc<dyn KeyProvider>,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            transport,
            pool: Arc::new(KeyPool::new(provider)),
            attempt_timeout,
        }
    }

    /// Build a Gemini-backed client from settings.
    ///
    /// Rotation order follows the configured key order.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut transport_config = GeminiTransportConfig::new(settings.gemini_model.clone())
            .with_timeout(settings.request_timeout_seconds);
        if let Some(base_url) = &settings.gemini_base_url {
            transport_config = transport_config.with_base_url(base_url.clone());
        }

        let transport =
            GeminiTransport::new(transport_config).context("Failed to build Gemini transport")?;
        let provider = StaticKeys::new(settings.gemini_api_keys.clone());

        tracing::info!(
            key_count = settings.gemini_api_keys.len(),
            model = %settings.gemini_model,
            "Initialized failover client"
        );

        Ok(Self::new(
            Arc::new(transport),
            Arc::new(provider),
            Duration::from_secs(settings.attempt_timeout_seconds),
        ))
    }

    /// Run one generation request, rotating across keys on retriable
    /// failures.
    ///
    /// Makes exactly one pass over the pool: each key is tried at most
    /// once, a fatal failure aborts immediately, and a pass with nothing
    /// but retriable failures ends in [`GenerateError::KeysExhausted`].
    pub async fn generate(&self, prompt: &str, mode: RequestMode) -> Result<String, GenerateError> {
        self.pool.reload();
        let total = self.pool.len();
        if total == 0 {
            return Err(GenerateError::NoKeys);
        }

        let call_id = Uuid::new_v4();
        let config = mode.generation_config();

        tracing::debug!(
            call_id = %call_id,
            keys = total,
            mode = ?mode,
            prompt = %excerpt(prompt, PROMPT_LOG_CHARS),
            "Starting generation pass"
        );

        for attempt in 1..=total {
            let key = match self.pool.current() {
                Some(key) => key,
                // A concurrent reload emptied the pool under us
                None => return Err(GenerateError::NoKeys),
            };

            match self.attempt(&key, prompt, &config).await {
                AttemptOutcome::Success(text) => {
                    tracing::debug!(call_id = %call_id, attempt, "Generation succeeded");
                    return Ok(text);
                }
                AttemptOutcome::Retriable(err) => {
                    tracing::warn!(
                        call_id = %call_id,
                        attempt,
                        error = %err,
                        "Retriable failure, rotating to next key"
                    );
                    self.pool.advance();
                }
                AttemptOutcome::Fatal(err) => {
                    tracing::error!(
                        call_id = %call_id,
                        attempt,
                        error = %err,
                        "Fatal upstream failure"
                    );
                    return Err(GenerateError::Upstream(err));
                }
            }
        }

        tracing::warn!(call_id = %call_id, attempts = total, "All keys exhausted");
        Err(GenerateError::KeysExhausted { attempts: total })
    }

    /// Execute one attempt against one key, bounded by the per-attempt
    /// deadline, and classify the result.
    async fn attempt(
        &self,
        api_key: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> AttemptOutcome {
        let result = with_timeout(
            self.attempt_timeout,
            self.transport.complete(api_key, prompt, config),
        )
        .await;

        let error = match result {
            Ok(text) if !text.trim().is_empty() => return AttemptOutcome::Success(text),
            Ok(_) => TransportError::EmptyResponse,
            Err(TimeoutError::Timeout(elapsed)) => TransportError::AttemptTimedOut {
                secs: elapsed.as_secs(),
            },
            Err(TimeoutError::Inner(err)) => err,
        };

        match classify(&error) {
            FailureKind::Retriable => AttemptOutcome::Retriable(error),
            FailureKind::Fatal => AttemptOutcome::Fatal(error),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
