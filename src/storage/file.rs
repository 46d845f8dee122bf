// SPDX-License-Identifier: MIT

//! File-backed storage: one JSON file per key under a data directory.

use std::path::{Path, PathBuf};

use crate::storage::{SessionStorage, StorageError};

/// File-backed key-value storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait::async_trait]
impl SessionStorage for FileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(format!("{}: {e}", path.display()))),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);

        if let Some(parent) = path.parent() {
            ensure_dir(parent).await?;
        }

        tokio::fs::write(&path, value)
            .await
            .map_err(|e| StorageError::Write(format!("{}: {e}", path.display())))
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Remove(format!("{}: {e}", path.display()))),
        }
    }
}

async fn ensure_dir(dir: &Path) -> Result<(), StorageError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| StorageError::Write(format!("{}: {e}", dir.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys;

    #[tokio::test]
    async fn read_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.read(keys::SESSION).await.unwrap(), None);
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.write(keys::SESSION, r#"{"id":"u1"}"#).await.unwrap();
        assert_eq!(
            storage.read(keys::SESSION).await.unwrap().as_deref(),
            Some(r#"{"id":"u1"}"#)
        );
    }

    #[tokio::test]
    async fn write_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested/data"));

        storage.write(keys::SESSION, "{}").await.unwrap();
        assert!(storage.read(keys::SESSION).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.write(keys::SESSION, "{}").await.unwrap();
        storage.remove(keys::SESSION).await.unwrap();
        storage.remove(keys::SESSION).await.unwrap();
        assert_eq!(storage.read(keys::SESSION).await.unwrap(), None);
    }
}
