use std::time::Duration;

/// Explicit fetch configuration, passed to [`FetchClient`](crate::FetchClient)
/// at construction time. There is deliberately no module-level global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    /// Per-attempt timeout; elapsing it aborts the in-flight request and
    /// counts as one failed attempt.
    pub timeout: Duration,
    /// Total attempts before giving up. Clamped to at least one.
    pub attempts: u32,
    /// Fixed delay between attempts. The charts change a few times a year;
    /// exponential backoff buys nothing at this scale.
    pub delay: Duration,
}

impl Default for FetchConfig {
    /// 30 second timeout, 3 attempts, 2 seconds between them.
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.attempts, 3);
        assert_eq!(config.delay, Duration::from_secs(2));
    }
}
