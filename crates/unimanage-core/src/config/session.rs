//! Session persistence configuration.

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory the CLI keeps its session file in.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Key the CLI session is stored under (`<dir>/<key>.json`).
    #[serde(default = "default_key")]
    pub key: String,

    /// Cookie carrying the dashboard session id.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Lifetime of a dashboard session in seconds. Also sent as the cookie's
    /// `Max-Age`.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            key: default_key(),
            cookie_name: default_cookie_name(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.key.is_empty() || self.key.contains(['/', '\\']) || self.key.starts_with('.') {
            return Err(ConfigError::Config(format!(
                "session.key '{}' must be a plain file name",
                self.key
            )));
        }
        if self.cookie_name.is_empty() {
            return Err(ConfigError::Config("session.cookie_name must not be empty".to_string()));
        }
        if self.ttl_secs == 0 {
            return Err(ConfigError::Config("session.ttl_secs must be greater than zero".to_string()));
        }
        Ok(())
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".unimanage")
}

fn default_key() -> String {
    "university_user".to_string()
}

fn default_cookie_name() -> String {
    "university_session".to_string()
}

fn default_ttl_secs() -> u64 {
    86400
}
