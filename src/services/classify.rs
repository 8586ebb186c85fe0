//! Failure classification
//!
//! Decides whether a failed attempt justifies burning the next key.
//! Retriable failures are those attributable to the credential itself or to
//! transient service capacity; structural request errors would fail
//! identically on every key and are surfaced immediately.

use crate::services::transport::TransportError;

/// How a failed attempt affects the rotation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Rotate to the next key and keep going
    Retriable,
    /// Abort the pass and surface the error unchanged
    Fatal,
}

/// Upstream message fragments that identify credential or capacity
/// failures when the status code alone is not conclusive. Matched
/// case-insensitively against the provider's error text.
const RETRIABLE_PATTERNS: &[&str] = &[
    "api key",
    "invalid credential",
    "quota",
    "service unavailable",
    "503",
];

/// Classify a transport error as retriable or fatal.
pub fn classify(error: &TransportError) -> FailureKind {
    match error {
        TransportError::Api { code, message } => match code {
            // Unauthorized key, quota exhaustion, service unavailable
            401 | 403 | 429 | 503 => FailureKind::Retriable,
            // Gemini reports a bad key as 400 API_KEY_INVALID, so the
            // message patterns catch what the status code does not.
            _ if matches_retriable(message) => FailureKind::Retriable,
            _ => FailureKind::Fatal,
        },
        // Could not reach the service at all
        TransportError::Http(e) if e.is_timeout() || e.is_connect() => FailureKind::Retriable,
        TransportError::AttemptTimedOut { .. } => FailureKind::Retriable,
        // An empty reply is a transient upstream hiccup, not a broken request
        TransportError::EmptyResponse => FailureKind::Retriable,
        _ => FailureKind::Fatal,
    }
}

fn matches_retriable(message: &str) -> bool {
    let message = message.to_lowercase();
    RETRIABLE_PATTERNS
        .iter()
        .any(|pattern| message.contains(pattern))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn api(code: u16, message: &str) -> TransportError {
        TransportError::Api {
            code,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_credential_failures_are_retriable() {
        assert_eq!(classify(&api(401, "unauthorized")), FailureKind::Retriable);
        assert_eq!(classify(&api(403, "forbidden")), FailureKind::Retriable);
        assert_eq!(
            classify(&api(400, "API key not valid. Please pass a valid API key.")),
            FailureKind::Retriable
        );
        assert_eq!(
            classify(&api(400, "Invalid credential supplied")),
            FailureKind::Retriable
        );
    }

    #[test]
    fn test_capacity_failures_are_retriable() {
        assert_eq!(
            classify(&api(429, "Quota exceeded for quota metric")),
            FailureKind::Retriable
        );
        assert_eq!(
            classify(&api(503, "The service is currently unavailable")),
            FailureKind::Retriable
        );
        assert_eq!(
            classify(&api(502, "upstream returned 503 Service Unavailable")),
            FailureKind::Retriable
        );
    }

    #[test]
    fn test_structural_errors_are_fatal() {
        assert_eq!(
            classify(&api(400, "Invalid JSON payload received")),
            FailureKind::Fatal
        );
        assert_eq!(classify(&api(404, "model not found")), FailureKind::Fatal);
        assert_eq!(
            classify(&TransportError::Parse("missing field `candidates`".to_string())),
            FailureKind::Fatal
        );
    }

    #[test]
    fn test_pattern_match_is_case_insensitive() {
        assert_eq!(
            classify(&api(400, "QUOTA exceeded")),
            FailureKind::Retriable
        );
    }

    #[test]
    fn test_empty_response_is_retriable() {
        assert_eq!(
            classify(&TransportError::EmptyResponse),
            FailureKind::Retriable
        );
    }

    #[test]
    fn test_attempt_timeout_is_retriable() {
        assert_eq!(
            classify(&TransportError::AttemptTimedOut { secs: 30 }),
            FailureKind::Retriable
        );
    }
}
