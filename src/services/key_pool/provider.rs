//! Key providers
//!
//! Sources for the ordered API key list. A provider backed by mutable
//! storage rotates new keys in on the pool's next reload.

use std::env;

/// Default environment variable holding the comma-separated key list
pub const DEFAULT_KEYS_VAR: &str = "GEMINI_API_KEYS";

/// Source of the ordered API key list
pub trait KeyProvider: Send + Sync {
    /// Return the current key list, in rotation order. May be empty.
    fn load(&self) -> Vec<String>;
}

/// Fixed key list captured at construction time
#[derive(Debug, Clone)]
pub struct StaticKeys {
    keys: Vec<String>,
}

impl StaticKeys {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }
}

impl KeyProvider for StaticKeys {
    fn load(&self) -> Vec<String> {
        self.keys.clone()
    }
}

/// Reads a comma-separated key list from an environment variable on every
/// load, so keys can be rotated without restarting the process.
#[derive(Debug, Clone)]
pub struct EnvKeys {
    var: String,
}

impl EnvKeys {
    /// Read from `GEMINI_API_KEYS`
    pub fn new() -> Self {
        Self::from_var(DEFAULT_KEYS_VAR)
    }

    /// Read from a custom environment variable
    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyProvider for EnvKeys {
    fn load(&self) -> Vec<String> {
        env::var(&self.var)
            .map(|raw| parse_key_list(&raw))
            .unwrap_or_default()
    }
}

/// Split a comma-separated key list, trimming whitespace and dropping empty
/// entries while preserving order.
pub fn parse_key_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
