//! Session gate.
//!
//! ```text
//!            restore()                 login() ok
//! Loading ─────────────> Unauthenticated ─────────> Authenticated
//!    │                        ^                          │
//!    └── stored user found ───┼──────────────────────────┤
//!                             └──────── logout() ────────┘
//! ```
//!
//! The gate owns the current user for one session key. The persisted form
//! is the JSON-serialized [`User`].

mod store;

pub use store::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};

use crate::auth::Authenticator;
use crate::user::User;
use std::sync::Arc;

/// Where a session currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// The persisted session has not been read yet.
    Loading,
    Unauthenticated,
    Authenticated(User),
}

/// Why a login attempt failed. The display strings are shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Login failed. Please try again.")]
    Unexpected { reason: String },
}

pub struct SessionGate<S> {
    store: S,
    authenticator: Arc<dyn Authenticator>,
    key: String,
    state: SessionState,
}

impl<S: SessionStore> SessionGate<S> {
    /// Create a gate in the `Loading` state. Call [`restore`](Self::restore)
    /// before rendering anything that depends on the user.
    pub fn new(store: S, authenticator: Arc<dyn Authenticator>, key: impl Into<String>) -> Self {
        Self {
            store,
            authenticator,
            key: key.into(),
            state: SessionState::Loading,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Read the persisted session. A missing, unreadable or corrupt entry
    /// leaves the gate unauthenticated; corrupt entries are removed.
    pub fn restore(&mut self) -> &SessionState {
        self.state = match self.store.load(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    tracing::debug!(user_id = %user.id, role = %user.role, "Restored session");
                    SessionState::Authenticated(user)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding corrupt stored session");
                    if let Err(e) = self.store.remove(&self.key) {
                        tracing::warn!(error = %e, "Failed to remove corrupt session");
                    }
                    SessionState::Unauthenticated
                }
            },
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored session");
                SessionState::Unauthenticated
            }
        };
        &self.state
    }

    /// Verify credentials and, on success, persist the user and switch to
    /// `Authenticated`. On failure the state is left unchanged.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, LoginError> {
        if email.is_empty() || password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        let user = match self.authenticator.authenticate(email, password).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::info!(email = %email, "Login rejected");
                return Err(LoginError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(error = %e, "Authentication backend failed");
                return Err(LoginError::Unexpected { reason: e.to_string() });
            }
        };

        let serialized = serde_json::to_string(&user).map_err(|e| LoginError::Unexpected {
            reason: e.to_string(),
        })?;
        if let Err(e) = self.store.save(&self.key, &serialized) {
            tracing::error!(error = %e, "Failed to persist session");
            return Err(LoginError::Unexpected { reason: e.to_string() });
        }

        tracing::info!(user_id = %user.id, role = %user.role, "User signed in");
        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }

    /// Drop the persisted session and return to `Unauthenticated`. If the
    /// store cannot remove the entry the state is left unchanged.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.remove(&self.key)?;
        if let Some(user) = self.user() {
            tracing::info!(user_id = %user.id, "User signed out");
        }
        self.state = SessionState::Unauthenticated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthError, DemoAuthenticator};
    use crate::role::Role;
    use async_trait::async_trait;
    use std::time::Duration;

    struct Rejecting;

    #[async_trait]
    impl Authenticator for Rejecting {
        async fn authenticate(&self, _: &str, _: &str) -> Result<Option<User>, AuthError> {
            Ok(None)
        }
    }

    struct Broken;

    #[async_trait]
    impl Authenticator for Broken {
        async fn authenticate(&self, _: &str, _: &str) -> Result<Option<User>, AuthError> {
            Err(AuthError::Unavailable("directory offline".to_string()))
        }
    }

    /// Accepts writes but refuses to delete anything.
    #[derive(Default)]
    struct UndeletableStore(MemorySessionStore);

    impl SessionStore for UndeletableStore {
        fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
            self.0.load(key)
        }

        fn save(&self, key: &str, value: &str) -> Result<(), SessionError> {
            self.0.save(key, value)
        }

        fn remove(&self, _: &str) -> Result<(), SessionError> {
            Err(SessionError::Storage("read-only volume".to_string()))
        }
    }

    fn demo() -> Arc<dyn Authenticator> {
        Arc::new(DemoAuthenticator::new(Duration::ZERO))
    }

    fn gate(auth: Arc<dyn Authenticator>) -> (Arc<MemorySessionStore>, SessionGate<Arc<MemorySessionStore>>) {
        let store = Arc::new(MemorySessionStore::new());
        let gate = SessionGate::new(Arc::clone(&store), auth, "university_user");
        (store, gate)
    }

    #[test]
    fn test_starts_loading_then_unauthenticated() {
        let (_, mut gate) = gate(demo());
        assert!(gate.is_loading());
        assert_eq!(gate.restore(), &SessionState::Unauthenticated);
        assert!(gate.user().is_none());
    }

    #[test]
    fn test_restore_stored_user() {
        let (store, mut gate) = gate(demo());
        let user = User::new("1", "admin@university.edu", "John Admin", Role::Admin);
        store
            .save("university_user", &serde_json::to_string(&user).unwrap())
            .unwrap();

        gate.restore();
        assert_eq!(gate.user(), Some(&user));
    }

    #[test]
    fn test_restore_discards_corrupt_entry() {
        let (store, mut gate) = gate(demo());
        store.save("university_user", "{not json").unwrap();

        assert_eq!(gate.restore(), &SessionState::Unauthenticated);
        assert_eq!(store.load("university_user").unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_fields_are_a_validation_error() {
        let (store, mut gate) = gate(demo());
        gate.restore();

        let err = gate.login("", "").await.unwrap_err();
        assert!(matches!(err, LoginError::MissingFields));
        assert_eq!(err.to_string(), "Please fill in all fields");
        assert!(!gate.is_authenticated());
        assert!(store.is_empty());

        assert!(matches!(
            gate.login("admin@university.edu", "").await,
            Err(LoginError::MissingFields)
        ));
    }

    #[tokio::test]
    async fn test_login_persists_and_logout_clears() {
        let (store, mut gate) = gate(demo());
        gate.restore();

        let user = gate.login("faculty@university.edu", "faculty123").await.unwrap();
        assert_eq!(user.role, Role::Faculty);
        assert!(gate.is_authenticated());

        let raw = store.load("university_user").unwrap().unwrap();
        let stored: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.name, "Dr. Sarah Johnson");

        gate.logout().unwrap();
        assert_eq!(gate.state(), &SessionState::Unauthenticated);
        assert_eq!(store.load("university_user").unwrap(), None);
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_user_signed_in() {
        let mut gate = SessionGate::new(UndeletableStore::default(), demo(), "university_user");
        gate.restore();
        gate.login("admin@university.edu", "admin123").await.unwrap();

        assert!(matches!(gate.logout(), Err(SessionError::Storage(_))));
        assert!(gate.is_authenticated());

        // The stored entry survived, so a fresh restore agrees with the gate.
        gate.restore();
        assert_eq!(gate.user().map(|u| u.role), Some(Role::Admin));
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let (store, mut gate) = gate(Arc::new(Rejecting));
        gate.restore();

        let err = gate.login("someone@university.edu", "pw").await.unwrap_err();
        assert!(matches!(err, LoginError::InvalidCredentials));
        assert_eq!(gate.state(), &SessionState::Unauthenticated);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_maps_to_generic_message() {
        let (_, mut gate) = gate(Arc::new(Broken));
        gate.restore();

        let err = gate.login("someone@university.edu", "pw").await.unwrap_err();
        assert_eq!(err.to_string(), "Login failed. Please try again.");
        assert!(matches!(err, LoginError::Unexpected { .. }));
        assert!(!gate.is_authenticated());
    }

    #[tokio::test]
    async fn test_file_backed_session_survives_new_gate() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = SessionGate::new(FileSessionStore::new(dir.path()), demo(), "university_user");
        first.restore();
        first.login("dept@university.edu", "dept123").await.unwrap();

        let mut second = SessionGate::new(FileSessionStore::new(dir.path()), demo(), "university_user");
        second.restore();
        assert_eq!(second.user().map(|u| u.role), Some(Role::DepartmentHead));
    }
}
