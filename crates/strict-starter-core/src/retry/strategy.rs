//! The retry strategy abstraction and the shared attempt loop.

use crate::time::delay_for;
use async_trait::async_trait;
use std::error::Error;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// A strategy for retrying failed operations with backoff.
///
/// Implementations decide how long to wait between attempts, how many
/// retries are allowed, and which errors are worth retrying at all.
///
/// Most implementations only need to supply [`next_delay`](Self::next_delay)
/// and [`max_retries`](Self::max_retries) and forward `execute` to
/// [`run_attempts`], which honours all three hooks.
///
/// # Examples
///
/// ```rust
/// use strict_starter_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backoff = ExponentialBackoff::doubling(3, Duration::from_millis(100));
///
/// let result = backoff.execute(|| async {
///     Ok::<_, std::io::Error>(42)
/// }).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait BackoffStrategy: Send + Sync {
    /// Execute an operation with retry logic.
    ///
    /// The operation is called repeatedly until it succeeds, a non-retryable
    /// error occurs, or the maximum number of retries is exceeded. Only the
    /// error from the last attempt is returned.
    async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Error + Send + Sync + 'static;

    /// Determine if an error is retryable.
    ///
    /// Default implementation returns `true` for all errors.
    ///
    /// `attempt` is the zero-indexed number of the attempt that just failed.
    fn should_retry(&self, error: &dyn Error, attempt: u32) -> bool {
        let _ = (error, attempt);
        true
    }

    /// The delay to wait after failed attempt `attempt` (0-indexed).
    ///
    /// Returning `None` stops retrying and surfaces the current error.
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// The maximum number of retries after the initial attempt.
    ///
    /// With `max_retries() == 3` the operation runs at most 4 times.
    fn max_retries(&self) -> u32;
}

/// Drive `operation` under `strategy` until it succeeds or gives up.
///
/// Attempts run strictly one after another. Between two attempts the loop
/// waits `strategy.next_delay(attempt)`; no wait follows the final failure.
///
/// ```rust
/// use strict_starter_core::retry::{run_attempts, BackoffStrategy};
/// use std::error::Error;
/// use std::time::Duration;
///
/// /// Retries only errors that mention the network.
/// struct NetworkOnly;
///
/// #[async_trait::async_trait]
/// impl BackoffStrategy for NetworkOnly {
///     async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
///     where
///         F: Fn() -> Fut + Send + Sync,
///         Fut: std::future::Future<Output = Result<T, E>> + Send,
///         T: Send,
///         E: Error + Send + Sync + 'static,
///     {
///         run_attempts(self, operation).await
///     }
///
///     fn should_retry(&self, error: &dyn Error, _attempt: u32) -> bool {
///         error.to_string().contains("network")
///     }
///
///     fn next_delay(&self, _attempt: u32) -> Option<Duration> {
///         Some(Duration::from_millis(1))
///     }
///
///     fn max_retries(&self) -> u32 {
///         2
///     }
/// }
/// ```
pub async fn run_attempts<S, F, Fut, T, E>(strategy: &S, operation: F) -> Result<T, E>
where
    S: BackoffStrategy + ?Sized,
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Error + Send + Sync + 'static,
{
    let mut attempt: u32 = 0;
    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(attempts = attempt + 1, "Operation succeeded after retries");
                }
                return Ok(value);
            }
            Err(err) if !strategy.should_retry(&err, attempt) => {
                debug!(attempt = attempt + 1, error = %err, "Non-retryable error");
                return Err(err);
            }
            Err(err) if attempt >= strategy.max_retries() => {
                warn!(
                    attempts = attempt + 1,
                    error = %err,
                    "Retries exhausted, giving up"
                );
                return Err(err);
            }
            Err(err) => {
                let Some(wait) = strategy.next_delay(attempt) else {
                    debug!(attempt = attempt + 1, "Strategy declined further retries");
                    return Err(err);
                };
                warn!(
                    attempt = attempt + 1,
                    error = %err,
                    delay = ?wait,
                    "Attempt failed, backing off"
                );
                delay_for(wait).await;
                attempt += 1;
            }
        }
    }
}
