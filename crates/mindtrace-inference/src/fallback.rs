//! Best-effort orchestration with a deterministic fallback.
//!
//! The same pattern guards both external-generation flows (recommendations
//! and synthetic records): attempt the external call exactly once, validate
//! the raw output strictly, and on *any* failure — call error, unparseable
//! output, output failing validation — substitute canned deterministic
//! output. Failures are logged at WARN (recoverable, fallback applied) and
//! never propagate to the caller.

use std::future::Future;

use tracing::{debug, warn};

use mindtrace_core::Result;

/// Run `attempt` once, validate its raw output into a `T`, and fall back to
/// `fallback()` on any error along the way.
///
/// `component` names the flow in log output. No retry is performed; a failed
/// call is treated identically to a malformed response.
pub async fn best_effort<T, Fut, V, F>(component: &str, attempt: Fut, validate: V, fallback: F) -> T
where
    Fut: Future<Output = Result<String>>,
    V: FnOnce(&str) -> Result<T>,
    F: FnOnce() -> T,
{
    let raw = match attempt.await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(
                component,
                error = %e,
                fallback = true,
                "External generation call failed, using deterministic fallback"
            );
            return fallback();
        }
    };

    match validate(&raw) {
        Ok(value) => {
            debug!(component, response_len = raw.len(), "External generation output accepted");
            value
        }
        Err(e) => {
            warn!(
                component,
                error = %e,
                response_len = raw.len(),
                fallback = true,
                "External generation output rejected, using deterministic fallback"
            );
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindtrace_core::Error;

    #[tokio::test]
    async fn test_valid_output_passes_through() {
        let result = best_effort(
            "test",
            async { Ok("42".to_string()) },
            |raw| {
                raw.parse::<i32>()
                    .map_err(|e| Error::Generation(e.to_string()))
            },
            || -1,
        )
        .await;
        assert_eq!(result, 42);
    }

    #[tokio::test]
    async fn test_call_error_uses_fallback() {
        let result = best_effort(
            "test",
            async { Err(Error::Generation("boom".to_string())) },
            |raw| {
                raw.parse::<i32>()
                    .map_err(|e| Error::Generation(e.to_string()))
            },
            || -1,
        )
        .await;
        assert_eq!(result, -1);
    }

    #[tokio::test]
    async fn test_invalid_output_uses_fallback() {
        let result = best_effort(
            "test",
            async { Ok("not a number".to_string()) },
            |raw| {
                raw.parse::<i32>()
                    .map_err(|e| Error::Generation(e.to_string()))
            },
            || -1,
        )
        .await;
        assert_eq!(result, -1);
    }
}
