//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum accepted password length.
    #[serde(default = "default_password_min_length")]
    pub password_min_length: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min_length(),
        }
    }
}

fn default_password_min_length() -> u32 {
    6
}
