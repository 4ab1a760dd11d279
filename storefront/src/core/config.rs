use std::time::Duration;

/// Storefront configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LOG_LEVEL | info | Fallback log filter when RUST_LOG is unset |
/// | LOG_DIR | (none) | Directory for daily-rolling log files |
/// | TICK_MS | 100 | UI poll interval (milliseconds) |
/// | FEED_LATENCY_MS | 150 | Simulated remote latency of the order store |
/// | DEMO_ORDERS | 3 | Orders seeded into the order store at start |
///
/// # Example
///
/// ```ignore
/// LOG_DIR=./logs FEED_LATENCY_MS=800 cargo run --bin storefront
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_dir: Option<String>,
    pub tick_ms: u64,
    pub feed_latency_ms: u64,
    pub demo_orders: usize,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            tick_ms: std::env::var("TICK_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            feed_latency_ms: std::env::var("FEED_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(150),
            demo_orders: std::env::var("DEMO_ORDERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
        }
    }

    /// Override the values tests care about
    pub fn with_overrides(tick_ms: u64, feed_latency_ms: u64, demo_orders: usize) -> Self {
        let mut config = Self::from_env();
        config.tick_ms = tick_ms;
        config.feed_latency_ms = feed_latency_ms;
        config.demo_orders = demo_orders;
        config
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn feed_latency(&self) -> Duration {
        Duration::from_millis(self.feed_latency_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides(50, 0, 0);
        assert_eq!(config.tick(), Duration::from_millis(50));
        assert!(config.feed_latency().is_zero());
        assert_eq!(config.demo_orders, 0);
    }

    #[test]
    fn test_tick_is_never_zero() {
        let config = Config::with_overrides(0, 0, 0);
        assert_eq!(config.tick(), Duration::from_millis(1));
    }
}
