//! Credential verification.
//!
//! The session gate delegates the actual credential check to an
//! [`Authenticator`]. Two implementations ship:
//!
//! - [`DemoAuthenticator`]: a stub that accepts anything and picks a demo
//!   user from the email address. It exists so the dashboard can be tried
//!   without configuration and is not an authentication design.
//! - [`AccountAuthenticator`]: checks credentials against accounts declared
//!   in the configuration file.

use crate::config::{AccountConfig, AuthConfig, AuthMode};
use crate::role::Role;
use crate::user::{Profile, User};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Errors from an authentication backend. Rejected credentials are not an
/// error; they are reported as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("authentication backend unavailable: {0}")]
    Unavailable(String),

    #[error("account misconfigured: {0}")]
    Misconfigured(String),
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify the credentials. `Ok(None)` means they were rejected.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, AuthError>;
}

/// Build the authenticator selected by the configuration.
pub fn from_config(config: &AuthConfig) -> Arc<dyn Authenticator> {
    match config.mode {
        AuthMode::Demo => Arc::new(DemoAuthenticator::new(Duration::from_millis(config.login_delay_ms))),
        AuthMode::Accounts => Arc::new(AccountAuthenticator::new(config.accounts.clone())),
    }
}

/// Warn that logins are not verified. Only entry points that accept logins
/// call this; reading a stored session does not.
pub fn warn_if_demo(config: &AuthConfig) {
    if config.mode == AuthMode::Demo {
        tracing::warn!("Demo authentication enabled: any credentials are accepted");
    }
}

/// Stub login that maps email substrings to fixed demo users.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    delay: Duration,
}

impl DemoAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The demo user for an email address.
    pub fn demo_user(email: &str) -> User {
        if email.contains("admin") {
            User::new("1", email, "John Admin", Role::Admin)
        } else if email.contains("faculty") {
            User::new("2", email, "Dr. Sarah Johnson", Role::Faculty).with_profile(Profile {
                department: Some("Computer Science".to_string()),
                faculty_id: Some("FAC001".to_string()),
                ..Default::default()
            })
        } else if email.contains("dept") {
            User::new("3", email, "Prof. Michael Chen", Role::DepartmentHead).with_profile(Profile {
                department: Some("Computer Science".to_string()),
                ..Default::default()
            })
        } else {
            User::new("4", email, "Emily Student", Role::Student).with_profile(Profile {
                department: Some("Computer Science".to_string()),
                student_id: Some("STU2024001".to_string()),
                ..Default::default()
            })
        }
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn authenticate(&self, email: &str, _password: &str) -> Result<Option<User>, AuthError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Some(Self::demo_user(email)))
    }
}

/// Checks credentials against configured accounts.
#[derive(Debug, Clone)]
pub struct AccountAuthenticator {
    accounts: Vec<AccountConfig>,
}

impl AccountAuthenticator {
    pub fn new(accounts: Vec<AccountConfig>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl Authenticator for AccountAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, AuthError> {
        let Some(account) = self
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email.trim()))
        else {
            tracing::debug!(email = %email, "Login for unknown account");
            return Ok(None);
        };

        let expected = account
            .get_password()
            .ok_or_else(|| AuthError::Misconfigured(format!("no password available for '{}'", account.email)))?;

        if expected == password {
            Ok(Some(account.to_user()))
        } else {
            tracing::debug!(email = %account.email, "Login with wrong password");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts() -> Vec<AccountConfig> {
        vec![AccountConfig {
            id: Some("u-7".to_string()),
            email: "Registrar@University.edu".to_string(),
            password: Some("s3cret".to_string()),
            password_env: None,
            name: "Dana Registrar".to_string(),
            role: Role::Admin,
            profile: None,
        }]
    }

    #[test]
    fn test_demo_user_by_email() {
        assert_eq!(DemoAuthenticator::demo_user("admin@university.edu").role, Role::Admin);
        assert_eq!(DemoAuthenticator::demo_user("faculty@university.edu").role, Role::Faculty);
        assert_eq!(DemoAuthenticator::demo_user("dept@university.edu").role, Role::DepartmentHead);
        let student = DemoAuthenticator::demo_user("someone@university.edu");
        assert_eq!(student.role, Role::Student);
        assert_eq!(
            student.profile.and_then(|p| p.student_id).as_deref(),
            Some("STU2024001")
        );
    }

    #[tokio::test]
    async fn test_demo_authenticator_accepts() {
        let auth = DemoAuthenticator::new(Duration::ZERO);
        let user = auth.authenticate("faculty@university.edu", "x").await.unwrap().unwrap();
        assert_eq!(user.name, "Dr. Sarah Johnson");
        assert_eq!(user.email, "faculty@university.edu");
    }

    #[tokio::test]
    async fn test_account_authenticator() {
        let auth = AccountAuthenticator::new(accounts());

        let user = auth
            .authenticate("registrar@university.edu", "s3cret")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.id, "u-7");
        assert_eq!(user.role, Role::Admin);

        assert!(auth.authenticate("registrar@university.edu", "wrong").await.unwrap().is_none());
        assert!(auth.authenticate("nobody@university.edu", "s3cret").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_account_without_resolvable_password() {
        let mut accounts = accounts();
        accounts[0].password = None;
        accounts[0].password_env = Some("UNIMANAGE_TEST_UNSET_PASSWORD".to_string());
        let auth = AccountAuthenticator::new(accounts);

        let err = auth
            .authenticate("registrar@university.edu", "s3cret")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Misconfigured(_)));
    }
}
