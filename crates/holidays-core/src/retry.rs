// ── Bounded retry with fixed delay ──
//
// Wraps any async operation in an explicit attempt loop. The delay between
// attempts is constant; the last failure is returned untouched once the
// retry budget is spent.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

/// Retry budget for a single logical request.
///
/// An always-failing operation is invoked `max_retries + 1` times: the
/// initial attempt plus one per retry. `max_retries = 0` means exactly one
/// attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay: Duration::from_millis(2000),
        }
    }
}

/// Result of a retried operation together with how many attempts it took.
#[derive(Debug)]
pub struct Attempted<T, E> {
    pub result: Result<T, E>,
    pub attempts: u32,
}

impl RetryPolicy {
    pub const fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Single attempt, no delay.
    pub const fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Upper bound on invocations of the wrapped operation.
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Run `operation` until it succeeds or the retry budget is spent.
    pub async fn execute<T, E, F, Fut>(&self, operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.run(operation).await.result
    }

    /// Like [`execute`](Self::execute), but also reports the attempt count.
    pub async fn run<T, E, F, Fut>(&self, mut operation: F) -> Attempted<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let max_attempts = self.max_attempts();
        let mut attempts = 0;

        loop {
            attempts += 1;
            match operation().await {
                Ok(value) => {
                    if attempts > 1 {
                        debug!(attempts, "operation succeeded after retry");
                    }
                    return Attempted {
                        result: Ok(value),
                        attempts,
                    };
                }
                Err(e) if attempts < max_attempts => {
                    warn!(
                        attempt = attempts,
                        max_attempts,
                        delay = ?self.delay,
                        error = %e,
                        "attempt failed, retrying"
                    );
                    tokio::time::sleep(self.delay).await;
                }
                Err(e) => {
                    if max_attempts > 1 {
                        warn!(attempts, error = %e, "retries exhausted");
                    }
                    return Attempted {
                        result: Err(e),
                        attempts,
                    };
                }
            }
        }
    }
}
