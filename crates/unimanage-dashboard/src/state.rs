//! Dashboard application state.

use std::sync::Arc;
use unimanage_core::auth::{self, Authenticator};
use unimanage_core::{MemorySessionStore, SessionGate, UniManageConfig};

/// Shared application state for the dashboard.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The loaded configuration.
    config: UniManageConfig,
    /// Verifies login credentials.
    authenticator: Arc<dyn Authenticator>,
    /// Signed-in users keyed by session id.
    sessions: Arc<MemorySessionStore>,
}

impl AppState {
    /// Create state using the authenticator selected in the configuration.
    pub fn new(config: UniManageConfig) -> Self {
        let authenticator = auth::from_config(&config.auth);
        Self::with_authenticator(config, authenticator)
    }

    /// Create state with an explicit authenticator.
    pub fn with_authenticator(config: UniManageConfig, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                authenticator,
                sessions: Arc::new(MemorySessionStore::with_ttl(config.session.ttl())),
                config,
            }),
        }
    }

    pub fn config(&self) -> &UniManageConfig {
        &self.inner.config
    }

    /// Name of the cookie carrying the session id.
    pub fn cookie_name(&self) -> &str {
        &self.inner.config.session.cookie_name
    }

    /// Session cookie lifetime in seconds, matching the store's TTL.
    pub fn session_max_age(&self) -> u64 {
        self.inner.config.session.ttl_secs
    }

    pub fn institution(&self) -> &str {
        self.inner.config.institution_name()
    }

    pub fn sessions(&self) -> &Arc<MemorySessionStore> {
        &self.inner.sessions
    }

    /// A session gate for one browser session. The gate starts in `Loading`.
    pub fn session_gate(&self, session_id: &str) -> SessionGate<Arc<MemorySessionStore>> {
        SessionGate::new(
            Arc::clone(&self.inner.sessions),
            Arc::clone(&self.inner.authenticator),
            session_id,
        )
    }
}
