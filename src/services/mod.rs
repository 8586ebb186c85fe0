//! Services module
//!
//! Contains the transport seam, its Gemini implementation, failure
//! classification, and key rotation.

pub mod classify;
pub mod gemini;
pub mod key_pool;
pub mod transport;

pub use classify::{classify, FailureKind};
pub use gemini::{GeminiTransport, GeminiTransportConfig};
pub use key_pool::{parse_key_list, EnvKeys, KeyPool, KeyProvider, StaticKeys};
pub use transport::{TextGenerator, TransportError};
