use std::time::Duration;

/// Fixed pause between two page fetches.
pub const DEFAULT_POLITENESS_DELAY_MS: u64 = 500;

/// Cooperative fixed-interval delay. No token bucket, no adaptive backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolitenessLimiter {
    interval: Duration,
}

impl PolitenessLimiter {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// No delay at all (tests, local fixtures).
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Suspend the caller for the configured interval.
    pub async fn wait(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

impl Default for PolitenessLimiter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_POLITENESS_DELAY_MS))
    }
}
