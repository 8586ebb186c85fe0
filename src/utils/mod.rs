//! Utility modules
//!
//! Contains timeout handling and string helpers for log fields.

pub mod string;
pub mod timeout;

pub use string::excerpt;
pub use timeout::{with_timeout, TimeoutError};
