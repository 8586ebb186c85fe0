//! Application settings and configuration
//!
//! This module provides configuration management for the client,
//! loading settings from environment variables with sensible defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

use crate::schemas::gemini::models;
use crate::services::key_pool::parse_key_list;

/// Main client settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    // App settings
    pub app_name: String,
    pub app_version: String,
    pub log_level: String,

    /// Ordered Gemini API keys; rotation order follows this order
    #[serde(skip_serializing)]
    pub gemini_api_keys: Vec<String>,

    /// Base URL override for the Gemini endpoint
    pub gemini_base_url: Option<String>,

    /// Model name
    pub gemini_model: String,

    /// Whole-request timeout on the HTTP client
    pub request_timeout_seconds: u64,

    /// Deadline for a single attempt inside the rotation loop; worst-case
    /// call latency is bounded by key count times this value
    pub attempt_timeout_seconds: u64,
}

impl Settings {
    /// Load settings from environment variables with defaults
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignored in production typically)
        dotenvy::dotenv().ok();

        let settings = Self {
            app_name: env_or_default("APP_NAME", "llm-failover"),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: env_or_default("LOG_LEVEL", "info"),

            gemini_api_keys: parse_key_list(&env_or_default("GEMINI_API_KEYS", "")),
            gemini_base_url: env::var("GEMINI_BASE_URL").ok(),
            gemini_model: env_or_default("GEMINI_MODEL", models::GEMINI_2_0_FLASH),

            request_timeout_seconds: env_or_default("REQUEST_TIMEOUT_SECONDS", "120")
                .parse()
                .context("Invalid REQUEST_TIMEOUT_SECONDS value")?,
            attempt_timeout_seconds: env_or_default("ATTEMPT_TIMEOUT_SECONDS", "60")
                .parse()
                .context("Invalid ATTEMPT_TIMEOUT_SECONDS value")?,
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings
    fn validate(&self) -> Result<()> {
        if self.request_timeout_seconds == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be > 0");
        }
        if self.attempt_timeout_seconds == 0 {
            anyhow::bail!("ATTEMPT_TIMEOUT_SECONDS must be > 0");
        }

        if self.gemini_api_keys.is_empty() {
            tracing::warn!(
                "No Gemini API keys configured; generate calls will fail until GEMINI_API_KEYS is set"
            );
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "llm-failover".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            gemini_api_keys: Vec::new(),
            gemini_base_url: None,
            gemini_model: models::GEMINI_2_0_FLASH.to_string(),
            request_timeout_seconds: 120,
            attempt_timeout_seconds: 60,
        }
    }
}

/// Helper function to get environment variable with default
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.app_name, "llm-failover");
        assert_eq!(settings.gemini_model, models::GEMINI_2_0_FLASH);
        assert_eq!(settings.request_timeout_seconds, 120);
        assert_eq!(settings.attempt_timeout_seconds, 60);
        assert!(settings.gemini_api_keys.is_empty());
    }

    #[test]
    fn test_validate_rejects_zero_timeouts() {
        let settings = Settings {
            request_timeout_seconds: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            attempt_timeout_seconds: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_api_keys_are_not_serialized() {
        let settings = Settings {
            gemini_api_keys: vec!["secret-key".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("secret-key"));
    }
}
