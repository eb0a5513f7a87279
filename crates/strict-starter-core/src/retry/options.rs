//! The plain `retry_with_backoff` entry points.

use super::exponential::ExponentialBackoff;
use super::strategy::BackoffStrategy;
use std::error::Error;
use std::future::Future;
use std::time::Duration;

/// Default number of retries after the initial attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Parameters of a doubling retry: `max_retries` retries, waiting
/// `base_delay * 2^n` after failed attempt `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryOptions {
    /// Retries after the initial attempt
    pub max_retries: u32,
    /// Delay after the first failure
    pub base_delay: Duration,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryOptions {
    /// Options with the given retry count and default base delay.
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Replace the base delay.
    pub fn base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Run `operation` under these options.
    pub async fn run<F, Fut, T, E>(self, operation: F) -> Result<T, E>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Error + Send + Sync + 'static,
    {
        ExponentialBackoff::from(self).execute(operation).await
    }
}

impl From<RetryOptions> for ExponentialBackoff {
    fn from(options: RetryOptions) -> Self {
        ExponentialBackoff::doubling(options.max_retries, options.base_delay)
    }
}

/// Retry `operation` with doubling backoff.
///
/// The operation runs at most `max_retries + 1` times. After failed attempt
/// `n` (0-indexed) the call sleeps `base_delay_ms * 2^n` milliseconds before
/// trying again. The first success is returned immediately; once every
/// attempt has failed, the error from the last one is returned and earlier
/// errors are dropped. No delay follows the final failure.
///
/// # Examples
///
/// ```rust
/// use strict_starter_core::retry::retry_with_backoff;
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let counter = AtomicU32::new(0);
/// let calls = &counter;
/// let value = retry_with_backoff(
///     move || async move {
///         if calls.fetch_add(1, Ordering::SeqCst) < 2 {
///             Err(std::io::Error::other("not yet"))
///         } else {
///             Ok("ready")
///         }
///     },
///     3,
///     100,
/// )
/// .await
/// .unwrap();
///
/// assert_eq!(value, "ready");
/// assert_eq!(counter.load(Ordering::SeqCst), 3);
/// # }
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(
    operation: F,
    max_retries: u32,
    base_delay_ms: u64,
) -> Result<T, E>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Error + Send + Sync + 'static,
{
    RetryOptions {
        max_retries,
        base_delay: Duration::from_millis(base_delay_ms),
    }
    .run(operation)
    .await
}

/// [`retry_with_backoff`] with 3 retries and a 1000ms base delay.
pub async fn retry_with_defaults<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Error + Send + Sync + 'static,
{
    RetryOptions::default().run(operation).await
}
