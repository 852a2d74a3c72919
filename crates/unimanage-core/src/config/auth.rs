//! Login configuration.

use super::ConfigError;
use crate::role::Role;
use crate::user::{Profile, User};
use serde::{Deserialize, Serialize};

/// How login credentials are checked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Placeholder login: any credentials succeed and the role is picked
    /// from the email address. Never use outside demos.
    #[default]
    Demo,
    /// Credentials are checked against `accounts`.
    Accounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub mode: AuthMode,

    /// Artificial latency of demo logins, in milliseconds.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Accounts for `mode: accounts`.
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::default(),
            login_delay_ms: default_login_delay_ms(),
            accounts: Vec::new(),
        }
    }
}

impl AuthConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == AuthMode::Accounts && self.accounts.is_empty() {
            return Err(ConfigError::Config(
                "auth.mode is 'accounts' but no accounts are configured".to_string(),
            ));
        }
        for account in &self.accounts {
            if account.password.is_none() && account.password_env.is_none() {
                return Err(ConfigError::Config(format!(
                    "account '{}' needs either password or password_env",
                    account.email
                )));
            }
        }
        Ok(())
    }
}

/// A user allowed to sign in when `mode: accounts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Stable user id. Defaults to the email address.
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    /// Password in clear text (prefer `password_env`).
    #[serde(default)]
    pub password: Option<String>,
    /// Environment variable containing the password.
    #[serde(default)]
    pub password_env: Option<String>,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl AccountConfig {
    /// Get the password, checking password_env first.
    pub fn get_password(&self) -> Option<String> {
        if let Some(env_var) = &self.password_env
            && let Ok(password) = std::env::var(env_var)
        {
            return Some(password);
        }
        self.password.clone()
    }

    /// The user created when this account signs in.
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone().unwrap_or_else(|| self.email.clone()),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            profile: self.profile.clone(),
        }
    }
}

fn default_login_delay_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> AccountConfig {
        AccountConfig {
            id: None,
            email: "dean@university.edu".to_string(),
            password: Some("inline".to_string()),
            password_env: None,
            name: "Dean".to_string(),
            role: Role::Admin,
            profile: None,
        }
    }

    #[test]
    fn test_password_env_takes_precedence() {
        let mut account = account();
        account.password_env = Some("UNIMANAGE_TEST_DEAN_PASSWORD".to_string());

        // SAFETY: We're in a test and controlling the environment
        unsafe {
            std::env::set_var("UNIMANAGE_TEST_DEAN_PASSWORD", "from-env");
        }
        assert_eq!(account.get_password().as_deref(), Some("from-env"));

        // SAFETY: as above
        unsafe {
            std::env::remove_var("UNIMANAGE_TEST_DEAN_PASSWORD");
        }
        assert_eq!(account.get_password().as_deref(), Some("inline"));
    }

    #[test]
    fn test_user_id_defaults_to_email() {
        let user = account().to_user();
        assert_eq!(user.id, "dean@university.edu");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_account_without_password_is_invalid() {
        let mut account = account();
        account.password = None;
        let config = AuthConfig {
            mode: AuthMode::Accounts,
            login_delay_ms: 0,
            accounts: vec![account],
        };
        assert!(config.validate().is_err());
    }
}
