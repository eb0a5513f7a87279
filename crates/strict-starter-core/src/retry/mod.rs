//! Retry strategies and backoff implementations.
//!
//! This module provides a universal abstraction for retry logic with doubling
//! backoff and custom retry predicates.
//!
//! # Key Types
//!
//! - [`BackoffStrategy`] - Core trait for retry strategies
//! - [`ExponentialBackoff`] - Doubling backoff from a base delay
//! - [`retry_with_backoff`] - Doubling retry with a retry count and base delay
//!
//! # Examples
//!
//! ```rust
//! use strict_starter_core::retry::retry_with_backoff;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Up to 3 retries, waiting 100ms, 200ms, 400ms between attempts
//! let result = retry_with_backoff(
//!     || async { Ok::<_, std::io::Error>(42) },
//!     3,
//!     100,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

mod exponential;
mod options;
mod strategy;

pub use exponential::ExponentialBackoff;
pub use options::{
    DEFAULT_BASE_DELAY, DEFAULT_MAX_RETRIES, RetryOptions, retry_with_backoff, retry_with_defaults,
};
pub use strategy::{BackoffStrategy, run_attempts};
