// SPDX-License-Identifier: MIT

//! Shared test doubles for the store and bridge scenario tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use haeya_shell::bridge::{RenderingSurface, SurfaceError};
use haeya_shell::models::Session;
use haeya_shell::services::{IdentityProvider, ProviderError, ProviderIdentity};
use haeya_shell::session::SessionStore;
use haeya_shell::shell::{Navigator, Route};
use haeya_shell::storage::{MemoryStorage, SessionStorage, StorageError};

/// A fixed identity the stub provider signs in with.
#[allow(dead_code)]
pub fn test_identity(token: Option<&str>) -> ProviderIdentity {
    ProviderIdentity {
        id: "user-1".to_string(),
        email: "user@example.com".to_string(),
        name: "Test User".to_string(),
        photo: Some("https://example.com/avatar.png".to_string()),
        token: token.map(str::to_string),
    }
}

#[allow(dead_code)]
pub fn test_session(token: Option<&str>) -> Session {
    Session {
        id: "user-1".to_string(),
        email: "user@example.com".to_string(),
        name: "Test User".to_string(),
        picture: Some("https://example.com/avatar.png".to_string()),
        token: token.map(str::to_string),
    }
}

/// Identity provider double with a scripted sign-in result.
pub struct StubProvider {
    result: Mutex<Result<ProviderIdentity, ProviderError>>,
    pub sign_out_calls: AtomicUsize,
}

impl StubProvider {
    #[allow(dead_code)]
    pub fn signs_in(identity: ProviderIdentity) -> Self {
        Self {
            result: Mutex::new(Ok(identity)),
            sign_out_calls: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn fails_with(error: ProviderError) -> Self {
        Self {
            result: Mutex::new(Err(error)),
            sign_out_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for StubProvider {
    async fn ensure_available(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn sign_in(&self) -> Result<ProviderIdentity, ProviderError> {
        self.result.lock().unwrap().clone()
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Storage double whose remove call always fails.
#[derive(Default)]
pub struct FailingRemoveStorage {
    inner: MemoryStorage,
}

#[async_trait::async_trait]
impl SessionStorage for FailingRemoveStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.write(key, value).await
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Remove("disk unhappy".to_string()))
    }
}

/// Rendering-surface double recording loads and injected scripts.
#[derive(Default)]
pub struct RecordingSurface {
    pub loads: Mutex<Vec<String>>,
    pub scripts: Mutex<Vec<String>>,
    pub fail_injection: AtomicBool,
}

impl RecordingSurface {
    #[allow(dead_code)]
    pub fn last_script(&self) -> Option<String> {
        self.scripts.lock().unwrap().last().cloned()
    }

    #[allow(dead_code)]
    pub fn script_count(&self) -> usize {
        self.scripts.lock().unwrap().len()
    }
}

impl RenderingSurface for RecordingSurface {
    fn load(&self, uri: &str) {
        self.loads.lock().unwrap().push(uri.to_string());
    }

    fn inject_script(&self, script: &str) -> Result<(), SurfaceError> {
        if self.fail_injection.load(Ordering::SeqCst) {
            return Err(SurfaceError("surface gone".to_string()));
        }

        self.scripts.lock().unwrap().push(script.to_string());
        Ok(())
    }
}

/// Navigator double recording route replacements.
#[derive(Default)]
pub struct RecordingNavigator {
    pub replacements: Mutex<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn replace(&self, route: Route) {
        self.replacements.lock().unwrap().push(route);
    }
}

/// Store over the given storage and a stub provider.
#[allow(dead_code)]
pub fn store_with(
    storage: Arc<dyn SessionStorage>,
    provider: Arc<StubProvider>,
) -> Arc<SessionStore> {
    Arc::new(SessionStore::new(storage, provider))
}
