//! Gemini transport
//!
//! This module handles communication with the Google Gemini API using REST.
//! It implements [`TextGenerator`] for the non-streaming `generateContent`
//! endpoint; one call issues one request with one API key.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::schemas::gemini::{
    models, GeminiContent, GeminiError, GeminiRequest, GeminiResponse, GenerationConfig,
};
use crate::services::transport::{TextGenerator, TransportError};

// ============================================================================
// Constants
// ============================================================================

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// Transport Configuration
// ============================================================================

/// Configuration for the Gemini transport
#[derive(Debug, Clone)]
pub struct GeminiTransportConfig {
    /// Model name (e.g., "gemini-2.0-flash")
    pub model: String,

    /// Base URL (default: generativelanguage.googleapis.com)
    pub base_url: Option<String>,

    /// Whole-request timeout on the HTTP client, in seconds
    pub timeout_seconds: u64,
}

impl Default for GeminiTransportConfig {
    fn default() -> Self {
        Self {
            model: models::GEMINI_2_0_FLASH.to_string(),
            base_url: None,
            timeout_seconds: 120,
        }
    }
}

impl GeminiTransportConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

// ============================================================================
// Gemini Transport
// ============================================================================

/// reqwest-backed [`TextGenerator`] for the Gemini REST API
#[derive(Clone)]
pub struct GeminiTransport {
    /// HTTP client
    client: Client,

    /// Model name
    model: String,

    /// Base URL override
    base_url: Option<String>,
}

impl GeminiTransport {
    /// Create a new Gemini transport
    pub fn new(config: GeminiTransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            model: config.model,
            base_url: config.base_url,
        })
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(GEMINI_API_BASE)
    }
}

#[async_trait]
impl TextGenerator for GeminiTransport {
    async fn complete(
        &self,
        api_key: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, TransportError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent::user(prompt)],
            system_instruction: None,
            generation_config: Some(config.clone()),
        };

        let url = format!("{}/models/{}:generateContent", self.base_url(), self.model);

        tracing::debug!(
            model = %self.model,
            url = %url,
            "Calling Gemini generateContent API"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Prefer the structured Gemini error envelope
            if let Ok(gemini_error) = serde_json::from_str::<GeminiError>(&error_text) {
                return Err(TransportError::Api {
                    code: gemini_error.error.code,
                    message: gemini_error.error.message,
                });
            }

            return Err(TransportError::Api {
                code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response.text().await?;

        let response: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Gemini response");
            TransportError::Parse(e.to_string())
        })?;

        Ok(response.primary_text())
    }
}

// ============================================================================
// Tests
// ============================================================================
