// Storage module - persistent key-value store
//
// A thin file-backed key-value store: one small file per key under the
// configured store directory. The contract is deliberately narrow -
// get/set/remove, all async, all individually fallible. Every call catches
// and logs its own I/O errors; callers receive a safe default (None, no-op)
// rather than an error. In-memory state stays authoritative for the running
// session; the store is best-effort durability for the next launch.

use std::path::{Path, PathBuf};

pub mod prefs;

/// File-backed key-value store. Cloneable so fire-and-forget writers can
/// own a handle (it is just a path).
#[derive(Debug, Clone)]
pub struct KvStore {
    root: PathBuf,
}

impl KvStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    /// Creation failure is logged, not propagated: subsequent reads return
    /// defaults and writes log their own failures.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if let Err(e) = std::fs::create_dir_all(&root) {
            tracing::error!(dir = %root.display(), error = %e, "failed to create store directory");
        }
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Read the value for `key`. Returns `None` when the key is absent or
    /// the read fails (failure is logged).
    pub async fn get(&self, key: &str) -> Option<String> {
        match tokio::fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed, returning default");
                None
            }
        }
    }

    /// Write `value` under `key`, overwriting any previous value.
    /// Failures are logged and swallowed.
    pub async fn set(&self, key: &str, value: &str) {
        if let Err(e) = tokio::fs::write(self.key_path(key), value).await {
            tracing::warn!(key, error = %e, "storage write failed");
        }
    }

    /// Remove `key`. Absent keys are fine; other failures are logged.
    pub async fn remove(&self, key: &str) {
        match tokio::fs::remove_file(self.key_path(key)).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(key, error = %e, "storage remove failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> KvStore {
        let dir = std::env::temp_dir().join(format!("wird-kv-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        KvStore::open(dir)
    }

    #[tokio::test]
    async fn test_get_absent_key_is_none() {
        let store = temp_store("absent");
        assert_eq!(store.get("missing").await, None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trip() {
        let store = temp_store("roundtrip");
        store.set("language", "ur").await;
        assert_eq!(store.get("language").await.as_deref(), Some("ur"));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = temp_store("overwrite");
        store.set("theme", "light").await;
        store.set("theme", "dark").await;
        assert_eq!(store.get("theme").await.as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_remove_then_get_is_none() {
        let store = temp_store("remove");
        store.set("k", "v").await;
        store.remove("k").await;
        assert_eq!(store.get("k").await, None);
        // Removing an absent key is a silent no-op
        store.remove("k").await;
    }
}
