#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Small building blocks for fallible, asynchronous code.
//!
//! - **Outcome values** via [`Outcome<T>`](outcome::Outcome): a tagged
//!   success/failure value for callers that prefer inspecting results to
//!   propagating errors
//! - **Validation** via [`is_not_empty`](validate::is_not_empty) and the
//!   [`Validator`](validate::Validator) trait
//! - **A delay primitive** via [`delay`](time::delay)
//! - **Retry with doubling backoff** via
//!   [`retry_with_backoff`](retry::retry_with_backoff), built on the
//!   [`BackoffStrategy`](retry::BackoffStrategy) trait
//! - **Configuration** via [`ConfigOptions`](config::ConfigOptions)
//! - **Declarative error boundaries** via the [`error_boundary!`] macro
//!
//! # Examples
//!
//! Using the prelude for convenient imports:
//!
//! ```rust
//! use strict_starter_core::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let name = " ferris ";
//! let greeting: Outcome<String> = if is_not_empty(name) {
//!     success_result(format!("hello, {}", name.trim()))
//! } else {
//!     error_result("name is blank")
//! };
//! assert_eq!(greeting.data().map(String::as_str), Some("hello, ferris"));
//!
//! let value = retry_with_backoff(|| async { Ok::<_, std::io::Error>(42) }, 3, 100).await?;
//! assert_eq!(value, 42);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod outcome;
pub mod retry;
#[cfg(feature = "trace")]
pub mod telemetry;
pub mod time;
pub mod validate;

/// Convenient re-exports of commonly used items.
///
/// ```rust
/// use strict_starter_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ConfigOptions;
    pub use crate::error::StarterError;
    pub use crate::error_boundary;
    pub use crate::outcome::{Outcome, error_result, success_result};
    pub use crate::retry::{
        BackoffStrategy, ExponentialBackoff, RetryOptions, retry_with_backoff, retry_with_defaults,
    };
    pub use crate::time::{delay, delay_for};
    pub use crate::validate::{NotEmpty, Validator, is_not_empty};
}
