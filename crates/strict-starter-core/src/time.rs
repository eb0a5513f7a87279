//! The delay primitive.
//!
//! [`delay`] is the only place the crate suspends; the retry loop waits
//! between attempts through it.

use std::time::Duration;

/// Suspend for `ms` milliseconds on the tokio timer.
///
/// A zero delay still yields once, completing on the next scheduling
/// opportunity.
///
/// ```
/// # #[tokio::main]
/// # async fn main() {
/// strict_starter_core::time::delay(10).await;
/// # }
/// ```
pub async fn delay(ms: u64) {
    delay_for(Duration::from_millis(ms)).await;
}

/// [`delay`] taking a [`Duration`].
pub async fn delay_for(duration: Duration) {
    if duration.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(duration).await;
    }
}
