//! Doubling exponential backoff.

use super::strategy::{BackoffStrategy, run_attempts};
use async_trait::async_trait;
use std::error::Error;
use std::future::Future;
use std::time::Duration;

/// Exponential backoff that doubles the wait after every failed attempt.
///
/// Failed attempt `n` (0-indexed) is followed by a wait of
/// `base_delay * 2^n`. The arithmetic is exact on [`Duration`] and saturates
/// at [`Duration::MAX`] instead of overflowing.
///
/// # Examples
///
/// ```rust
/// use strict_starter_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backoff = ExponentialBackoff::doubling(3, Duration::from_secs(1));
/// assert_eq!(backoff.next_delay(2), Some(Duration::from_secs(4)));
///
/// let result = backoff.execute(|| async {
///     Ok::<_, std::io::Error>(42)
/// }).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentialBackoff {
    max_retries: u32,
    base_delay: Duration,
}

impl ExponentialBackoff {
    /// Doubling backoff from `base_delay`, allowing `max_retries` retries.
    pub fn doubling(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// The delay before the first retry.
    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }
}

#[async_trait]
impl BackoffStrategy for ExponentialBackoff {
    async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Error + Send + Sync + 'static,
    {
        run_attempts(self, operation).await
    }

    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        if self.base_delay.is_zero() {
            return Some(Duration::ZERO);
        }

        let delay = 2u32
            .checked_pow(attempt)
            .and_then(|factor| self.base_delay.checked_mul(factor))
            .unwrap_or(Duration::MAX);
        Some(delay)
    }

    fn max_retries(&self) -> u32 {
        self.max_retries
    }
}
