//! Session storage backends.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use std::time::{Duration, Instant};

/// Errors raised by a session store.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid session key: {0:?}")]
    InvalidKey(String),

    #[error("session storage error: {0}")]
    Storage(String),
}

/// Key/value storage for serialized sessions.
pub trait SessionStore: Send + Sync {
    /// Read the raw entry stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Replace the entry stored under `key`.
    fn save(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Delete the entry under `key`. Deleting a missing entry is not an error.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SessionError> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        (**self).remove(key)
    }
}

/// In-process store shared by every request of the dashboard.
///
/// With a time-to-live, entries older than the TTL read as missing and are
/// evicted on the next read or write.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, MemoryEntry>>,
    ttl: Option<Duration>,
}

#[derive(Debug)]
struct MemoryEntry {
    value: String,
    issued_at: Instant,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose entries expire `ttl` after they were saved.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::default(),
            ttl: Some(ttl),
        }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Number of stored sessions, expired ones included until evicted.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> Result<usize, SessionError> {
        let mut entries = self.write_entries()?;
        let before = entries.len();
        entries.retain(|_, entry| !self.is_expired(entry));
        Ok(before - entries.len())
    }

    fn is_expired(&self, entry: &MemoryEntry) -> bool {
        self.ttl.is_some_and(|ttl| entry.issued_at.elapsed() >= ttl)
    }

    fn write_entries(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, MemoryEntry>>, SessionError> {
        self.entries.write().map_err(|e| {
            SessionError::Storage(format!("Failed to acquire write lock: {}", e))
        })
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        {
            let entries = self.entries.read().map_err(|e| {
                SessionError::Storage(format!("Failed to acquire read lock: {}", e))
            })?;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !self.is_expired(entry) => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }

        tracing::debug!("Evicting expired session");
        let mut entries = self.write_entries()?;
        if entries.get(key).is_some_and(|entry| self.is_expired(entry)) {
            entries.remove(key);
        }
        Ok(None)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.write_entries()?;
        entries.retain(|_, entry| !self.is_expired(entry));
        entries.insert(
            key.to_string(),
            MemoryEntry {
                value: value.to_string(),
                issued_at: Instant::now(),
            },
        );
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.write_entries()?;
        entries.remove(key);
        Ok(())
    }
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, SessionError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(SessionError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let path = self.path_for(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load("a").unwrap(), None);

        store.save("a", "one").unwrap();
        store.save("b", "two").unwrap();
        assert_eq!(store.load("a").unwrap().as_deref(), Some("one"));
        assert_eq!(store.len(), 2);

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.load("a").unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_expires_entries() {
        let store = MemorySessionStore::with_ttl(Duration::ZERO);
        store.save("a", "one").unwrap();
        assert_eq!(store.len(), 1);

        assert_eq!(store.load("a").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_save_evicts_stale_entries() {
        let store = MemorySessionStore::with_ttl(Duration::ZERO);
        store.save("a", "one").unwrap();
        store.save("b", "two").unwrap();
        store.save("c", "three").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.purge_expired().unwrap(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_keeps_fresh_entries() {
        let store = MemorySessionStore::with_ttl(Duration::from_secs(3600));
        store.save("a", "one").unwrap();
        assert_eq!(store.load("a").unwrap().as_deref(), Some("one"));
        assert_eq!(store.purge_expired().unwrap(), 0);
        assert_eq!(store.ttl(), Some(Duration::from_secs(3600)));
    }

    #[test]
    fn test_arc_store_forwards() {
        let store = Arc::new(MemorySessionStore::new());
        let shared: Arc<MemorySessionStore> = Arc::clone(&store);
        shared.save("k", "v").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("sessions"));

        assert_eq!(store.load("university_user").unwrap(), None);

        store.save("university_user", "{}").unwrap();
        assert!(dir.path().join("sessions/university_user.json").exists());
        assert_eq!(store.load("university_user").unwrap().as_deref(), Some("{}"));

        store.remove("university_user").unwrap();
        assert_eq!(store.load("university_user").unwrap(), None);
        store.remove("university_user").unwrap();
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());
        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(store.save(key, "x"), Err(SessionError::InvalidKey(_))), "{key}");
        }
    }
}
