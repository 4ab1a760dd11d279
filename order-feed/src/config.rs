//! Feed configuration

use std::time::Duration;

/// Memory store configuration
#[derive(Debug, Clone, Default)]
pub struct FeedConfig {
    /// Simulated remote round-trip applied before each command
    pub latency: Duration,
}

impl FeedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulated remote latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}
