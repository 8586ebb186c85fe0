//! Key pool implementation
//!
//! The ordered key sequence and its rotation cursor live behind one mutex,
//! so a reload is an atomic swap of the whole sequence and the cursor can
//! never be observed out of bounds. The lock is released before any await
//! point; callers get a cloned key, not a reference into the pool.

use std::sync::{Arc, Mutex};

use super::provider::KeyProvider;

#[derive(Debug, Default)]
struct PoolState {
    /// Keys in rotation order
    keys: Vec<String>,

    /// Invariant: cursor < keys.len() whenever keys is non-empty
    cursor: usize,
}

/// Ordered pool of API keys with a rotation cursor
pub struct KeyPool {
    provider: Arc<dyn KeyProvider>,
    state: Mutex<PoolState>,
}

impl KeyPool {
    /// Create an empty pool; call [`KeyPool::reload`] to populate it.
    pub fn new(provider: Arc<dyn KeyProvider>) -> Self {
        Self {
            provider,
            state: Mutex::new(PoolState::default()),
        }
    }

    /// Replace the stored sequence with the provider's current list.
    ///
    /// The cursor survives a reload while it still lands in bounds, so the
    /// rotation position carries across calls; otherwise it resets to 0.
    /// Idempotent, safe to call on every request.
    pub fn reload(&self) {
        let fresh = self.provider.load();
        let mut state = self.state.lock().unwrap();
        if state.cursor >= fresh.len() {
            state.cursor = 0;
        }
        state.keys = fresh;
    }

    /// Number of keys currently in the pool
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().keys.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The key under the cursor, or `None` when the pool is empty
    pub fn current(&self) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.keys.get(state.cursor).cloned()
    }

    /// Move the cursor to the next key, wrapping around. No-op on an empty
    /// pool.
    pub fn advance(&self) {
        let mut state = self.state.lock().unwrap();
        if !state.keys.is_empty() {
            state.cursor = (state.cursor + 1) % state.keys.len();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::provider::StaticKeys;
    use super::*;
    use std::collections::VecDeque;

    /// Provider that serves queued key sets, repeating the last one
    struct QueuedKeys {
        sets: Mutex<VecDeque<Vec<String>>>,
    }

    impl QueuedKeys {
        fn new(sets: Vec<Vec<&str>>) -> Arc<Self> {
            Arc::new(Self {
                sets: Mutex::new(
                    sets.into_iter()
                        .map(|set| set.into_iter().map(str::to_string).collect())
                        .collect(),
                ),
            })
        }
    }

    impl KeyProvider for QueuedKeys {
        fn load(&self) -> Vec<String> {
            let mut sets = self.sets.lock().unwrap();
            if sets.len() > 1 {
                sets.pop_front().unwrap()
            } else {
                sets.front().cloned().unwrap_or_default()
            }
        }
    }

    fn pool_with(keys: &[&str]) -> KeyPool {
        let provider = StaticKeys::new(keys.iter().map(|k| k.to_string()).collect());
        let pool = KeyPool::new(Arc::new(provider));
        pool.reload();
        pool
    }

    #[test]
    fn test_rotation_preserves_insertion_order() {
        let pool = pool_with(&["a", "b", "c"]);

        assert_eq!(pool.current(), Some("a".to_string()));
        pool.advance();
        assert_eq!(pool.current(), Some("b".to_string()));
        pool.advance();
        assert_eq!(pool.current(), Some("c".to_string()));
    }

    #[test]
    fn test_rotation_is_cyclic() {
        let pool = pool_with(&["a", "b", "c"]);

        // len() advances return the cursor to its starting value
        for _ in 0..pool.len() {
            pool.advance();
        }
        assert_eq!(pool.current(), Some("a".to_string()));
    }

    #[test]
    fn test_empty_pool() {
        let pool = pool_with(&[]);

        assert_eq!(pool.len(), 0);
        assert!(pool.is_empty());
        assert_eq!(pool.current(), None);

        // advance on an empty pool is a no-op, not a panic
        pool.advance();
        assert_eq!(pool.current(), None);
    }

    #[test]
    fn test_reload_resets_out_of_bounds_cursor() {
        let provider = QueuedKeys::new(vec![vec!["a", "b", "c"], vec!["x"]]);
        let pool = KeyPool::new(provider);

        pool.reload();
        pool.advance();
        pool.advance(); // cursor now at index 2

        pool.reload(); // shrinks to one key
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.current(), Some("x".to_string()));
    }

    #[test]
    fn test_reload_keeps_cursor_in_bounds() {
        let provider = QueuedKeys::new(vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
        let pool = KeyPool::new(provider);

        pool.reload();
        pool.advance(); // cursor at index 1

        pool.reload(); // same size, cursor carries over
        assert_eq!(pool.current(), Some("e".to_string()));
    }

    #[test]
    fn test_reload_to_empty() {
        let provider = QueuedKeys::new(vec![vec!["a", "b"], vec![]]);
        let pool = KeyPool::new(provider);

        pool.reload();
        pool.advance();

        pool.reload();
        assert!(pool.is_empty());
        assert_eq!(pool.current(), None);
    }

    #[test]
    fn test_reload_is_idempotent() {
        let pool = pool_with(&["a", "b"]);
        pool.advance();

        pool.reload();
        pool.reload();
        assert_eq!(pool.current(), Some("b".to_string()));
    }
}
