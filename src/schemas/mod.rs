//! Schema module
//!
//! Wire-format models for the downstream generation API.

pub mod gemini;
