//! Resilient Gemini text-generation client
//!
//! Turns an ordered pool of API keys into a single logical client that
//! rotates to the next key on retriable failures (invalid key, quota
//! exhaustion, service unavailability) and surfaces everything else
//! immediately.

// Public modules
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod schemas;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use client::{FailoverClient, RequestMode};
pub use config::Settings;
pub use error::GenerateError;
