//! Reconnect backoff policy
//!
//! Exponentially increasing delay between consecutive connect attempts,
//! capped at a maximum and reset whenever a connection is established. There
//! is no retry limit: a client running unattended on a local network should
//! keep trying for as long as it is alive, so failure only ever delays.

use std::time::Duration;

/// Default base delay before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);

/// Default cap on the retry delay.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(5);

/// Indefinite-retry policy: `min(cap, base * 2^attempts)`.
#[derive(Debug, Clone)]
pub struct ReconnectPolicy {
    base_delay: Duration,
    max_delay: Duration,
    retries: u32,
}

impl ReconnectPolicy {
    pub fn new(base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            base_delay,
            max_delay,
            retries: 0,
        }
    }

    /// The delay to wait before the next attempt. Each call counts as one
    /// failed attempt and doubles the following delay, up to the cap.
    pub fn next_delay(&mut self) -> Duration {
        let factor = 2u32.saturating_pow(self.retries);
        let delay = self.base_delay.saturating_mul(factor).min(self.max_delay);
        self.retries = self.retries.saturating_add(1);
        delay
    }

    /// Reset after a successful open; the next failure starts over at the
    /// base delay.
    pub fn reset(&mut self) {
        self.retries = 0;
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DELAY, DEFAULT_MAX_DELAY)
    }
}
