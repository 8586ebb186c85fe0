//! Key Pool Module
//!
//! Ordered API key pool with a rotation cursor. The pool re-queries its
//! [`KeyProvider`] at the start of every call, so key-set changes take
//! effect on the next call with no separate reload API.

mod pool;
mod provider;

pub use pool::KeyPool;
pub use provider::{parse_key_list, EnvKeys, KeyProvider, StaticKeys, DEFAULT_KEYS_VAR};
