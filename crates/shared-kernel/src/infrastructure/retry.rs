// crates/shared-kernel/src/infrastructure/retry.rs

use std::future::Future;
use std::time::Duration;
use rand::Rng;
use crate::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 20,
            max_backoff_ms: 500,
        }
    }
}

impl RetryConfig {
    /// Délai avant la tentative `attempt + 1` : 2^attempt * base, plafonné, plus un jitter de 0 à 25%
    fn backoff(&self, attempt: u32) -> Duration {
        let base = self
            .initial_backoff_ms
            .saturating_mul(2u64.saturating_pow(attempt))
            .min(self.max_backoff_ms);
        let jitter = rand::rng().random_range(0..base / 4 + 1);
        Duration::from_millis(base + jitter)
    }
}

/// Rejoue l'action tant qu'elle échoue sur un conflit de concurrence (Optimistic Locking).
/// Toute autre erreur est remontée immédiatement.
pub async fn with_retry<F, Fut, T>(config: RetryConfig, mut action: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    for attempt in 0..=config.max_retries {
        match action().await {
            Ok(res) => return Ok(res),
            Err(e) if e.is_concurrency_conflict() && attempt < config.max_retries => {
                let backoff = config.backoff(attempt);

                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries = config.max_retries,
                    "🔄 Concurrency conflict, retrying in {:?}...",
                    backoff
                );

                tokio::time::sleep(backoff).await;
            }
            Err(e) if e.is_concurrency_conflict() => break,
            Err(e) => return Err(e),
        }
    }

    Err(DomainError::TooManyConflicts(format!(
        "Operation failed after {} retries due to persistent conflicts",
        config.max_retries
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn conflict() -> DomainError {
        DomainError::ConcurrencyConflict { reason: "version mismatch".into() }
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_transient_conflicts() {
        let calls = AtomicU32::new(0);

        let result = with_retry(RetryConfig::default(), || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(conflict())
            } else {
                Ok(42)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_with_too_many_conflicts() {
        let calls = AtomicU32::new(0);

        let result: Result<()> = with_retry(RetryConfig::default(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(conflict())
        })
        .await;

        assert!(matches!(result, Err(DomainError::TooManyConflicts(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_other_errors_are_not_retried() {
        let calls = AtomicU32::new(0);

        let result: Result<()> = with_retry(RetryConfig::default(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(DomainError::Forbidden { reason: "nope".into() })
        })
        .await;

        assert!(matches!(result, Err(DomainError::Forbidden { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
