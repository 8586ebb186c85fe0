//! Timeout utilities
//!
//! Deadline helper for bounding a single attempt inside the rotation loop.

use std::time::Duration;

/// Error type for deadline-bounded operations
#[derive(Debug, thiserror::Error)]
pub enum TimeoutError<E> {
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Inner(E),
}

impl<E> TimeoutError<E> {
    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, TimeoutError::Timeout(_))
    }
}

/// Apply a deadline to an async operation.
///
/// Returns the operation's own error wrapped in `Inner` when it fails
/// before the deadline.
pub async fn with_timeout<T, E>(
    timeout: Duration,
    future: impl std::future::Future<Output = Result<T, E>>,
) -> Result<T, TimeoutError<E>> {
    match tokio::time::timeout(timeout, future).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(TimeoutError::Inner(err)),
        Err(_) => Err(TimeoutError::Timeout(timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_timeout_success() {
        let result: Result<i32, TimeoutError<String>> =
            with_timeout(Duration::from_secs(1), async { Ok::<_, String>(42) }).await;

        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_with_timeout_inner_error() {
        let result: Result<i32, TimeoutError<String>> = with_timeout(Duration::from_secs(1), async {
            Err::<i32, _>("inner error".to_string())
        })
        .await;

        let err = result.unwrap_err();
        assert!(!err.is_timeout());
        assert!(matches!(err, TimeoutError::Inner(ref msg) if msg == "inner error"));
    }

    #[tokio::test]
    async fn test_with_timeout_deadline_exceeded() {
        let result: Result<i32, TimeoutError<String>> =
            with_timeout(Duration::from_millis(10), async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                Ok::<_, String>(42)
            })
            .await;

        assert!(result.unwrap_err().is_timeout());
    }
}
