//! # Bounded Retry with Backoff
//!
//! Retry helper for transient registry failures. The delay grows by the
//! configured multiplier after each failed attempt and is capped at
//! `max_delay`; only the calling task sleeps.

use std::future::Future;

use tokio::time::sleep;

use crate::config::RetryConfig;

/// Terminal failure after the retry budget is spent.
#[derive(Debug)]
pub struct RetryFailure<E> {
    /// How many attempts were made in total.
    pub attempts: u32,
    /// The error from the final attempt.
    pub last_error: E,
}

/// Runs `operation` up to `config.max_attempts` times, sleeping between
/// attempts.
///
/// The operation receives the 1-based attempt number. The first success
/// wins; exhausting the budget returns the last error together with the
/// attempt count.
pub async fn retry_with_backoff<F, Fut, T, E>(
    config: &RetryConfig,
    mut operation: F,
) -> Result<T, RetryFailure<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut delay = config.initial_delay;
    let max_attempts = config.max_attempts.max(1);

    for attempt in 1..=max_attempts {
        tracing::debug!(attempt, max_attempts, "attempting operation");

        match operation(attempt).await {
            Ok(result) => {
                if attempt > 1 {
                    tracing::info!(attempt, "operation succeeded after retry");
                }
                return Ok(result);
            }
            Err(error) if attempt == max_attempts => {
                tracing::error!(attempt, error = %error, "operation failed after all retries");
                return Err(RetryFailure {
                    attempts: attempt,
                    last_error: error,
                });
            }
            Err(error) => {
                tracing::warn!(
                    attempt,
                    error = %error,
                    delay_ms = delay.as_millis(),
                    "operation failed, retrying after delay"
                );
                sleep(delay).await;
                delay = delay
                    .mul_f64(config.multiplier)
                    .min(config.max_delay);
            }
        }
    }

    unreachable!("loop always returns on the final attempt")
}

// =============================================================================
// Unit Tests
// =============================================================================
