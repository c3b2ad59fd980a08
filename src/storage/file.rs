//! Directory-backed key-value store.
//!
//! Each key is stored as `<dir>/<key>.json`, mirroring how a browser keeps
//! one string per local-storage key.

use super::error::StoreError;
use super::KeyValueStore;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Key-value store persisting each key to its own file.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` as the backing directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let dir_error = |source| StoreError::Io {
            path: self.dir.clone(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(dir_error)?;

        // The staged file is removed on drop if it never reaches `path`.
        let mut staged = NamedTempFile::new_in(&self.dir).map_err(dir_error)?;
        staged
            .write_all(value.as_bytes())
            .map_err(|source| StoreError::Io {
                path: staged.path().to_path_buf(),
                source,
            })?;
        staged.persist(&path).map_err(|err| StoreError::Io {
            path,
            source: err.error,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.read("AddressBook").unwrap(), None);
    }

    #[test]
    fn write_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("store");
        let mut store = FileStore::new(&nested);

        store.write("AddressBook", "[]").unwrap();

        assert!(nested.join("AddressBook.json").exists());
        assert_eq!(fs::read_dir(&nested).unwrap().count(), 1);
        assert_eq!(store.read("AddressBook").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn path_like_keys_are_rejected() {
        let store = FileStore::new("/tmp/unused");

        for key in ["", ".", "..", "a/b", r"a\b"] {
            assert!(
                matches!(store.path_for(key), Err(StoreError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
        assert!(store.path_for("AddressBook").is_ok());
    }

    #[test]
    fn failed_write_leaves_no_staged_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("AddressBook.json")).unwrap();
        let mut store = FileStore::new(dir.path());

        let result = store.write("AddressBook", "[]");

        assert!(matches!(result, Err(StoreError::Io { .. })));
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["AddressBook.json"]);
    }

    #[test]
    fn rewrite_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.write("AddressBook", "[]").unwrap();
        store.write("AddressBook", "[1]").unwrap();

        assert_eq!(store.read("AddressBook").unwrap().as_deref(), Some("[1]"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
