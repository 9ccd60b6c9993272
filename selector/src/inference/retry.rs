//! Exponential backoff for transient provider failures.
//!
//! Retries live inside the HTTP clients; callers of [`GenerationClient`]
//! see a single call that either succeeds or fails.
//!
//! [`GenerationClient`]: crate::inference::GenerationClient

use std::time::{Duration, SystemTime};

/// Default maximum number of retries for transient errors
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default base delay for exponential backoff (in milliseconds)
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;
/// Maximum delay cap (in milliseconds)
pub const MAX_DELAY_MS: u64 = 30000;

/// Retry configuration for HTTP generation clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts for failed requests
    pub max_retries: u32,
    /// Base delay in milliseconds for exponential backoff
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryConfig {
    /// Creates a new retry config with default values
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
        }
    }

    /// Sets the maximum number of retries
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the base delay for exponential backoff
    #[must_use]
    pub const fn with_base_delay_ms(mut self, delay_ms: u64) -> Self {
        self.base_delay_ms = delay_ms;
        self
    }

    /// Calculates the delay for a given retry attempt with jitter
    #[must_use]
    pub fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        // base_delay * 2^attempt, capped
        let delay_ms = self
            .base_delay_ms
            .saturating_mul(1u64.checked_shl(attempt).unwrap_or(u64::MAX));
        let capped_delay = delay_ms.min(MAX_DELAY_MS);

        // 0-25% jitter; the factor is in [0, 1000)
        let jitter = capped_delay
            .saturating_mul(jitter_factor())
            .saturating_div(4000);
        Duration::from_millis(capped_delay.saturating_add(jitter))
    }
}

fn jitter_factor() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    u64::from(nanos % 1000)
}
