//! Error types

mod types;

pub use types::GenerateError;
