use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError, data_dir};

/// File name of the store inside the data directory.
const STORE_FILE: &str = "store.json";

/// Store backed by a single flat JSON object on disk.
///
/// The whole map is held in memory and rewritten on every change, so a
/// reader always sees the last completed write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store in the XDG data directory
    /// (`~/.local/share/folio-contact/store.json`).
    pub fn new() -> Result<Self, StoreError> {
        Self::open(data_dir()?.join(STORE_FILE))
    }

    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the map to a sibling temp file, then renames it into place.
    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&self.entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.entries.get(key).is_some_and(|v| v == value) {
            return Ok(());
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn make_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join(STORE_FILE)).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_file_is_empty_store() {
        let (_dir, store) = make_store();
        assert_eq!(store.get("theme"), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn values_survive_reopen() {
        let (dir, mut store) = make_store();
        store.set("theme", "dark").unwrap();
        store.set("portfolio_form_email", "a@b.com").unwrap();

        let reopened = JsonFileStore::open(dir.path().join(STORE_FILE)).unwrap();
        assert_eq!(reopened.get("theme"), Some("dark".to_string()));
        assert_eq!(
            reopened.get("portfolio_form_email"),
            Some("a@b.com".to_string())
        );
    }

    #[test]
    fn remove_is_persisted() {
        let (dir, mut store) = make_store();
        store.set("language", "fil").unwrap();
        store.remove("language").unwrap();

        let reopened = JsonFileStore::open(dir.path().join(STORE_FILE)).unwrap();
        assert_eq!(reopened.get("language"), None);
    }

    #[test]
    fn removing_absent_key_does_not_create_file() {
        let (_dir, mut store) = make_store();
        store.remove("language").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn file_is_flat_json_object() {
        let (_dir, mut store) = make_store();
        store.set("theme", "light").unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, serde_json::json!({ "theme": "light" }));
    }

    #[test]
    fn non_object_file_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        fs::write(&path, "[1, 2, 3]").unwrap();
        let result = JsonFileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[test]
    fn empty_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        fs::write(&path, "").unwrap();
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn unicode_values_round_trip() {
        let (dir, mut store) = make_store();
        store.set("portfolio_form_name", "Señor Dela Cruz").unwrap();
        let reopened = JsonFileStore::open(dir.path().join(STORE_FILE)).unwrap();
        assert_eq!(
            reopened.get("portfolio_form_name"),
            Some("Señor Dela Cruz".to_string())
        );
    }
}
