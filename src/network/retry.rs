//! Retry logic with exponential backoff

use std::time::Duration;
use tracing::warn;
use crate::errors::{PoolError, PoolResult};

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub exponential_base: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            exponential_base: 2.0,
        }
    }
}

impl RetryConfig {
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            ..Default::default()
        }
    }
}

/// Backoff step with up to +/-5% jitter. `unit` is a sample from `[0, 1)`.
fn next_delay(config: &RetryConfig, delay: u64, unit: f64) -> u64 {
    let grown = (delay as f64 * config.exponential_base).min(config.max_delay_ms as f64);
    let jitter = grown * 0.1 * (unit - 0.5);
    ((grown + jitter).max(0.0) as u64).min(config.max_delay_ms)
}

pub async fn retry_with_backoff<F, Fut, T, E>(
    operation: F,
    config: &RetryConfig,
    context: &str,
) -> PoolResult<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: Into<anyhow::Error>,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay_ms;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if attempt >= config.max_attempts => {
                // Keep errors that already carry a pool variant.
                let e: anyhow::Error = e.into();
                return Err(match e.downcast::<PoolError>() {
                    Ok(pool_error) => pool_error,
                    Err(e) => PoolError::Network {
                        message: format!("{} failed after {} attempts", context, attempt),
                        source: Some(e),
                        retry_count: attempt,
                    },
                });
            }
            Err(e) => {
                let e: anyhow::Error = e.into();
                warn!(
                    "Attempt {}/{} failed for {}: {}. Retrying in {}ms...",
                    attempt, config.max_attempts, context, e, delay
                );

                tokio::time::sleep(Duration::from_millis(delay)).await;

                delay = next_delay(config, delay, rand::random::<f64>());
            }
        }
    }
}
