//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie issued by the hosting layer.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Absolute session lifetime in hours. A session older than this
    /// reads back as absent regardless of activity.
    #[serde(default = "default_absolute_timeout")]
    pub absolute_timeout_hours: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            absolute_timeout_hours: default_absolute_timeout(),
        }
    }
}

fn default_cookie_name() -> String {
    "quizhub.sid".to_string()
}

fn default_absolute_timeout() -> u64 {
    12
}
