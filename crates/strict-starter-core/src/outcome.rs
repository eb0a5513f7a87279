//! Value-level success/failure results.
//!
//! [`Outcome`] is the uniform return shape for fallible operations whose
//! callers would rather inspect a value than propagate an error. Exactly one
//! of the payload slots exists: a `Success` carries data, a `Failure` carries
//! a human-readable message.
//!
//! On the wire an outcome keeps the familiar record layout:
//!
//! ```text
//! {"success": true,  "data": <T>}
//! {"success": false, "error": "<message>"}
//! ```

use crate::error::StarterError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A tagged success/failure value.
///
/// Build outcomes with [`success_result`] / [`error_result`] (or
/// [`Outcome::success`] / [`Outcome::failure`]).
///
/// # Examples
///
/// ```
/// use strict_starter_core::outcome::{error_result, success_result, Outcome};
///
/// let ok = success_result(42);
/// assert!(ok.is_success());
/// assert_eq!(ok.data(), Some(&42));
/// assert_eq!(ok.error(), None);
///
/// let failed: Outcome<i32> = error_result("Something went wrong");
/// assert!(!failed.is_success());
/// assert_eq!(failed.error(), Some("Something went wrong"));
/// assert_eq!(failed.data(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with a message.
    Failure(String),
}

impl<T> Outcome<T> {
    /// Wrap a successful value.
    pub fn success(data: T) -> Self {
        Self::Success(data)
    }

    /// Wrap a failure message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// `true` for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The success payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Consume the outcome, keeping only the success payload.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Transform the success payload, leaving failures untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(data) => Outcome::Success(f(data)),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Switch to error propagation: failures become [`StarterError::Operation`].
    pub fn into_result(self) -> Result<T, StarterError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(message) => Err(StarterError::Operation(message)),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}

/// Create a success outcome holding `data`.
pub fn success_result<T>(data: T) -> Outcome<T> {
    Outcome::Success(data)
}

/// Create a failure outcome holding `message`.
pub fn error_result<T>(message: impl Into<String>) -> Outcome<T> {
    Outcome::Failure(message.into())
}

#[derive(Serialize)]
struct RecordRef<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Record<T> {
    success: bool,
    // Present-but-null is a payload; only an absent key means "no data"
    #[serde(default = "absent", deserialize_with = "present")]
    data: Option<T>,
    error: Option<String>,
}

fn absent<T>() -> Option<T> {
    None
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> TryFrom<Record<T>> for Outcome<T> {
    type Error = StarterError;

    fn try_from(record: Record<T>) -> Result<Self, Self::Error> {
        match (record.success, record.data, record.error) {
            (true, Some(data), None) => Ok(Self::Success(data)),
            (false, None, Some(message)) => Ok(Self::Failure(message)),
            (true, None, _) => Err(StarterError::InvalidOutcome(
                "success record without data".to_string(),
            )),
            (false, _, None) => Err(StarterError::InvalidOutcome(
                "failure record without error".to_string(),
            )),
            (_, Some(_), Some(_)) => Err(StarterError::InvalidOutcome(
                "record carries both data and error".to_string(),
            )),
        }
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordRef {
            success: self.is_success(),
            data: self.data(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = Record::<T>::deserialize(deserializer)?;
        Self::try_from(record).map_err(de::Error::custom)
    }
}
