//! Common test utilities and helpers

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// The error a [`FlakyOperation`] fails with; carries the 1-based attempt number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("attempt {0} failed")]
pub struct AttemptError(pub u32);

/// An operation that fails its first `failures` calls, then returns `value`.
///
/// Every call is timestamped on the tokio clock so tests can check the
/// spacing between attempts.
#[derive(Clone)]
pub struct FlakyOperation {
    failures: u32,
    value: &'static str,
    calls: Arc<Mutex<Vec<Instant>>>,
}

impl FlakyOperation {
    pub fn new(failures: u32, value: &'static str) -> Self {
        Self {
            failures,
            value,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[allow(dead_code)]
    pub fn always_failing() -> Self {
        Self::new(u32::MAX, "unreachable")
    }

    pub async fn call(&self) -> Result<&'static str, AttemptError> {
        let attempt = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(Instant::now());
            u32::try_from(calls.len()).unwrap()
        };

        if attempt <= self.failures {
            Err(AttemptError(attempt))
        } else {
            Ok(self.value)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Time between consecutive calls.
    #[allow(dead_code)]
    pub fn gaps(&self) -> Vec<Duration> {
        let calls = self.calls.lock().unwrap();
        calls.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

/// Assert `actual` is `expected`, allowing for millisecond timer granularity.
#[allow(dead_code)]
pub fn assert_about(actual: Duration, expected: Duration) {
    assert!(
        actual >= expected && actual < expected + Duration::from_millis(10),
        "expected about {expected:?}, got {actual:?}"
    );
}
