// SPDX-License-Identifier: MIT

//! Application error types.
//!
//! Nothing in this crate surfaces an error to the user as a blocking
//! failure; every path degrades to the unauthenticated state or a logged
//! no-op. The variants exist so hosts can log with the right category and
//! tests can assert on the failure class.

use crate::bridge::SurfaceError;
use crate::services::ProviderError;
use crate::storage::StorageError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Identity provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Rendering surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether this is an expected, recoverable outcome (user cancelled the
    /// provider UI, a sign-in already in flight, provider unavailable).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Provider(e) if e.is_recoverable())
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_only_for_expected_provider_outcomes() {
        assert!(AppError::from(ProviderError::Cancelled).is_recoverable());
        assert!(AppError::from(ProviderError::InProgress).is_recoverable());
        assert!(
            AppError::from(ProviderError::ServiceUnavailable("down".to_string()))
                .is_recoverable()
        );

        assert!(!AppError::from(ProviderError::Network("dns".to_string())).is_recoverable());
        assert!(!AppError::from(StorageError::Read("io".to_string())).is_recoverable());
        assert!(!AppError::from(SurfaceError("gone".to_string())).is_recoverable());
    }
}
