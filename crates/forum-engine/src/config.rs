//! # Engine Configuration
//!
//! Everything tunable about a running forum: the node address stamped into actor ids,
//! the ask timeouts, and the metrics reporting period. Every field has a default, so an
//! empty JSON object (or no file at all) gives the standard setup.
//!
//! ```json
//! { "node": "10.0.0.7:8080", "feed_timeout_ms": 2500 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Network address of this node, carried by every actor id it hosts.
    pub node: String,
    pub inbox_timeout_ms: u64,
    pub feed_timeout_ms: u64,
    pub registration_timeout_ms: u64,
    /// Per-post budget when a community lists its posts.
    pub post_details_timeout_ms: u64,
    /// Period of the engine's message-count report. `0` disables it.
    pub metrics_interval_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            node: "local".to_string(),
            inbox_timeout_ms: 5_000,
            feed_timeout_ms: 5_000,
            registration_timeout_ms: 5_000,
            post_details_timeout_ms: 2_000,
            metrics_interval_ms: 10_000,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            inbox: Duration::from_millis(self.inbox_timeout_ms),
            feed: Duration::from_millis(self.feed_timeout_ms),
            registration: Duration::from_millis(self.registration_timeout_ms),
            post_details: Duration::from_millis(self.post_details_timeout_ms),
        }
    }

    pub fn metrics_interval(&self) -> Option<Duration> {
        (self.metrics_interval_ms > 0).then(|| Duration::from_millis(self.metrics_interval_ms))
    }
}

/// Headroom an actor relaying an ask adds on top of the budget of the actor it waits
/// for, so the inner fallback arrives before the outer ask gives up.
pub const REPLY_GRACE: Duration = Duration::from_secs(1);

/// The ask budgets, copied into every actor that issues asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub inbox: Duration,
    pub feed: Duration,
    pub registration: Duration,
    pub post_details: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        EngineConfig::default().timeouts()
    }
}
