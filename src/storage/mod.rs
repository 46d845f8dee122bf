// SPDX-License-Identifier: MIT

//! Durable local storage for the session entry.
//!
//! One key-value entry, JSON string value. The trait is object-safe so the
//! store can hold `Arc<dyn SessionStorage>` and hosts can supply their own
//! platform keychain/preferences implementation.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage keys as constants.
pub mod keys {
    /// The persisted session record.
    pub const SESSION: &str = "auth_user";
}

/// Storage failure; callers treat these as absence or best-effort completion.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("storage remove failed: {0}")]
    Remove(String),
}

/// Key-value storage for the session entry.
#[async_trait::async_trait]
pub trait SessionStorage: Send + Sync {
    /// Read the value at `key`, `None` when absent.
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` at `key`, overwriting any prior entry.
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the entry at `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
