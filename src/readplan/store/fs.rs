use super::KeyValueStore;
use crate::error::{ReadplanError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed storage: key `k` lives in `<root>/k.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ReadplanError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(ReadplanError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.key_path(key);

        // Write to a sibling temp file first so a crash never leaves a half-written value.
        let tmp = self.root.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value).map_err(ReadplanError::Io)?;
        fs::rename(&tmp, &path).map_err(ReadplanError::Io)?;

        debug!(key, path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(ReadplanError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert_eq!(store.get("progress").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_persists() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("data");
        let mut store = FileStore::new(root.clone());

        store.set("theme", "\"dark\"").unwrap();

        assert!(root.join("theme.json").exists());
        let reopened = FileStore::new(root);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("\"dark\""));
    }

    #[test]
    fn set_overwrites_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());

        store.set("progress", "[]").unwrap();
        store.set("progress", "[\"a\"]").unwrap();

        assert_eq!(store.get("progress").unwrap().as_deref(), Some("[\"a\"]"));
        assert!(!temp.path().join(".progress.json.tmp").exists());
    }

    #[test]
    fn remove_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set("theme", "\"light\"").unwrap();

        store.remove("theme").unwrap();
        store.remove("theme").unwrap();

        assert_eq!(store.get("theme").unwrap(), None);
    }
}
