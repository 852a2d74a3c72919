//! Configuration for UniManage.
//!
//! A single YAML file (`unimanage.yaml`) configures the dashboard listener,
//! how logins are verified, and where the CLI persists its session. Every
//! section is optional and falls back to defaults.
//!
//! ```yaml
//! dashboard:
//!   host: 127.0.0.1
//!   port: 8080
//! auth:
//!   mode: accounts
//!   accounts:
//!     - email: registrar@university.edu
//!       password_env: REGISTRAR_PASSWORD
//!       name: Dana Registrar
//!       role: admin
//! session:
//!   dir: .unimanage
//!   ttl_secs: 86400
//! ```

pub mod auth;
pub mod dashboard;
pub mod session;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use auth::{AccountConfig, AuthConfig, AuthMode};
pub use dashboard::DashboardConfig;
pub use session::SessionConfig;

/// Complete configuration loaded from a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniManageConfig {
    /// Institution name shown in page titles.
    #[serde(default)]
    pub institution: Option<String>,

    /// Dashboard listener.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Login verification.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Session persistence.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl UniManageConfig {
    /// Load and validate configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()?;
        self.session.validate()?;
        Ok(())
    }

    pub fn institution_name(&self) -> &str {
        self.institution.as_deref().unwrap_or("UniManage")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = UniManageConfig::from_yaml("{}").unwrap();
        assert_eq!(config.dashboard.port, 8080);
        assert_eq!(config.dashboard.host, "127.0.0.1");
        assert_eq!(config.auth.mode, AuthMode::Demo);
        assert_eq!(config.auth.login_delay_ms, 1000);
        assert_eq!(config.session.key, "university_user");
        assert_eq!(config.session.cookie_name, "university_session");
        assert_eq!(config.session.ttl_secs, 86400);
        assert_eq!(config.institution_name(), "UniManage");
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
institution: Northfield University
dashboard:
  host: 0.0.0.0
  port: 9000
auth:
  mode: accounts
  login_delay_ms: 0
  accounts:
    - email: head@university.edu
      password: secret
      name: Prof. Ada Head
      role: department_head
      profile:
        department: Mathematics
session:
  dir: /tmp/unimanage
"#;
        let config = UniManageConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.institution_name(), "Northfield University");
        assert_eq!(config.dashboard.listen_addr(), "0.0.0.0:9000");
        assert_eq!(config.auth.mode, AuthMode::Accounts);
        assert_eq!(config.auth.accounts.len(), 1);
        let account = &config.auth.accounts[0];
        assert_eq!(account.role, Role::DepartmentHead);
        assert_eq!(
            account.profile.as_ref().and_then(|p| p.department.as_deref()),
            Some("Mathematics")
        );
        assert_eq!(config.session.dir.to_str(), Some("/tmp/unimanage"));
    }

    #[test]
    fn test_accounts_mode_requires_accounts() {
        let err = UniManageConfig::from_yaml("auth:\n  mode: accounts\n").unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
    }

    #[test]
    fn test_zero_session_ttl_is_rejected() {
        let err = UniManageConfig::from_yaml("session:\n  ttl_secs: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));

        let config = UniManageConfig::from_yaml("session:\n  ttl_secs: 600\n").unwrap();
        assert_eq!(config.session.ttl().as_secs(), 600);
    }

    #[test]
    fn test_unknown_role_is_a_parse_error() {
        let yaml = r#"
auth:
  mode: accounts
  accounts:
    - email: x@university.edu
      password: x
      name: X
      role: registrar
"#;
        let err = UniManageConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = UniManageConfig::from_file("/nonexistent/unimanage.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
