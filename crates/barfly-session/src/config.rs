//! Registry configuration.

use std::time::Duration;

/// Controls how long idle sessions are retained.
///
/// By default nothing is ever evicted: rooms and sessions live for the
/// life of the process.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// How long a session with no live connections is kept before
    /// [`SessionRegistry::expire_idle`](crate::SessionRegistry::expire_idle)
    /// removes it. `None` disables expiry.
    pub idle_session_ttl: Option<Duration>,

    /// How often the server runs the expiry sweep when a TTL is set.
    pub sweep_interval: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            idle_session_ttl: None,
            sweep_interval: Duration::from_secs(60),
        }
    }
}
