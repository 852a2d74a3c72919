//! `unimanage login | logout | whoami`
//!
//! The CLI keeps one session in `<session.dir>/<session.key>.json`.

use anyhow::{Context, bail};
use unimanage_core::{FileSessionStore, SessionGate, UniManageConfig, User, auth};

pub(crate) fn gate(config: &UniManageConfig) -> SessionGate<FileSessionStore> {
    SessionGate::new(
        FileSessionStore::new(&config.session.dir),
        auth::from_config(&config.auth),
        config.session.key.clone(),
    )
}

/// The stored user, if a session exists. Never authenticates, so demo mode
/// stays quiet here.
pub(crate) fn current_user(config: &UniManageConfig) -> Option<User> {
    let mut gate = gate(config);
    gate.restore();
    gate.user().cloned()
}

pub async fn login(config: &UniManageConfig, email: &str, password: &str) -> anyhow::Result<()> {
    auth::warn_if_demo(&config.auth);
    let mut gate = gate(config);
    gate.restore();

    eprintln!("Signing in...");
    let user = gate.login(email, password).await?;
    println!("Signed in as {} ({})", user.name, user.role.label());
    Ok(())
}

pub fn logout(config: &UniManageConfig) -> anyhow::Result<()> {
    let mut gate = gate(config);
    gate.restore();
    if !gate.is_authenticated() {
        println!("Not signed in");
        return Ok(());
    }
    gate.logout().context("failed to remove stored session")?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(config: &UniManageConfig) -> anyhow::Result<()> {
    let Some(user) = current_user(config) else {
        bail!("not signed in; run `unimanage login` first");
    };
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use unimanage_core::Role;

    /// Counts WARN events seen while installed.
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    fn config(dir: &std::path::Path) -> UniManageConfig {
        let mut config = UniManageConfig::default();
        config.session.dir = dir.to_path_buf();
        config.auth.login_delay_ms = 0;
        config
    }

    #[tokio::test]
    async fn test_login_whoami_logout() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        assert!(current_user(&config).is_none());
        login(&config, "faculty@university.edu", "faculty123").await.unwrap();
        assert!(dir.path().join("university_user.json").exists());
        assert_eq!(current_user(&config).map(|u| u.role), Some(Role::Faculty));

        logout(&config).unwrap();
        assert!(current_user(&config).is_none());
        assert!(whoami(&config).is_err());
    }

    #[test]
    fn test_reading_the_session_does_not_warn_about_demo_mode() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        assert_eq!(count_warnings(|| assert!(current_user(&config).is_none())), 0);
        assert_eq!(count_warnings(|| auth::warn_if_demo(&config.auth)), 1);
    }

    #[tokio::test]
    async fn test_login_with_empty_password_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());

        let err = login(&config, "admin@university.edu", "").await.unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");
        assert!(current_user(&config).is_none());
    }
}
