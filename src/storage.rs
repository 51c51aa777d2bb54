use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key under which the professor directory is stored.
pub const PROFESSORS_KEY: &str = "escola_professors";
/// Key under which the resource catalogue is stored.
pub const RESOURCES_KEY: &str = "escola_resources";
/// Key under which all bookings are stored.
pub const BOOKINGS_KEY: &str = "escola_bookings";
/// Key under which the logged-in identity is stored.
pub const SESSION_KEY: &str = "user";

/// String key → string value storage. Values are JSON documents.
///
/// Methods take `&self` so one backing store can be shared by the directory
/// store and the session manager.
pub trait Storage: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> io::Result<()>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        (**self).remove(key)
    }
}

/// One file per key: `<dir>/<key>.json`.
///
/// Writes go to `<key>.json.tmp`, are fsynced, then renamed over the target,
/// so a crash mid-write leaves the previous value intact.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (or create) the storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> io::Result<PathBuf> {
        // Keys become file names; refuse anything that could escape the directory.
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid storage key: {key:?}"),
            ));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &path)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Process-local storage, for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| io::Error::other("memory storage lock poisoned"))
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("reserva_test_storage").join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn file_set_and_get() {
        let storage = FileStorage::open(test_dir("set_get")).unwrap();
        assert_eq!(storage.get(BOOKINGS_KEY).unwrap(), None);

        storage.set(BOOKINGS_KEY, "[]").unwrap();
        assert_eq!(storage.get(BOOKINGS_KEY).unwrap().as_deref(), Some("[]"));
        assert!(storage.dir().join("escola_bookings.json").exists());
        assert!(!storage.dir().join("escola_bookings.json.tmp").exists());
    }

    #[test]
    fn file_overwrite_replaces_value() {
        let storage = FileStorage::open(test_dir("overwrite")).unwrap();
        storage.set(SESSION_KEY, "{\"a\":1}").unwrap();
        storage.set(SESSION_KEY, "{\"a\":2}").unwrap();
        assert_eq!(storage.get(SESSION_KEY).unwrap().as_deref(), Some("{\"a\":2}"));
    }

    #[test]
    fn file_remove_is_idempotent() {
        let storage = FileStorage::open(test_dir("remove")).unwrap();
        storage.set(SESSION_KEY, "{}").unwrap();
        storage.remove(SESSION_KEY).unwrap();
        storage.remove(SESSION_KEY).unwrap();
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn file_rejects_path_traversal_keys() {
        let storage = FileStorage::open(test_dir("traversal")).unwrap();
        let err = storage.set("../evil", "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(storage.get("").is_err());
    }

    #[test]
    fn memory_shared_through_arc() {
        let storage = Arc::new(MemoryStorage::new());
        let other = storage.clone();
        storage.set(PROFESSORS_KEY, "[]").unwrap();
        assert_eq!(other.get(PROFESSORS_KEY).unwrap().as_deref(), Some("[]"));
        other.remove(PROFESSORS_KEY).unwrap();
        assert_eq!(storage.get(PROFESSORS_KEY).unwrap(), None);
    }
}
