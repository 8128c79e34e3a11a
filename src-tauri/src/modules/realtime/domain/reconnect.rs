//! Reconnect pacing for the realtime channel.
//!
//! Exponential backoff with jitter and a hard cap: the channel keeps
//! retrying for as long as the app runs, but never hammers a recovering
//! server and never synchronizes its retries with other clients.

use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ReconnectPolicy {
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub multiplier: f64,
    /// Upper bound of the uniform jitter added on top.
    pub jitter: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            multiplier: 2.0,
            jitter: Duration::from_millis(500),
        }
    }
}

impl ReconnectPolicy {
    /// Deterministic capped exponential delay for the given attempt.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.powi(attempt.min(31) as i32);
        let delay = Duration::from_millis((self.base_delay.as_millis() as f64 * factor) as u64);
        delay.min(self.max_delay)
    }

    /// [`delay_for`](Self::delay_for) plus uniform jitter.
    pub fn jittered_delay_for(&self, attempt: u32) -> Duration {
        let jitter = rand::thread_rng().gen_range(0..=self.jitter.as_millis() as u64);
        self.delay_for(attempt) + Duration::from_millis(jitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_grows_exponentially() {
        let policy = ReconnectPolicy::default();
        assert_eq!(policy.delay_for(0), Duration::from_secs(1));
        assert_eq!(policy.delay_for(1), Duration::from_secs(2));
        assert_eq!(policy.delay_for(3), Duration::from_secs(8));
    }

    #[test]
    fn test_delay_is_capped() {
        let policy = ReconnectPolicy::default();
        assert_eq!(policy.delay_for(10), Duration::from_secs(60));
        assert_eq!(policy.delay_for(31), Duration::from_secs(60));
        // Large attempts must not overflow
        assert_eq!(policy.delay_for(u32::MAX), Duration::from_secs(60));
    }

    #[test]
    fn test_jitter_stays_within_bounds() {
        let policy = ReconnectPolicy::default();
        for _ in 0..50 {
            let jittered = policy.jittered_delay_for(0);
            assert!(jittered >= Duration::from_secs(1));
            assert!(jittered <= Duration::from_millis(1500));
        }
    }
}
