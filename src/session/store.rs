// SPDX-License-Identifier: MIT

//! The session store.
//!
//! Owns the single authenticated-session value. State moves
//! `Loading -> Unauthenticated | Authenticated` after the initial load and
//! between `Unauthenticated` and `Authenticated` on sign-in/sign-out; it
//! never returns to `Loading`. All mutation happens here; the bridge and
//! navigation only read.

use std::sync::Arc;

use tokio::sync::{watch, RwLock};

use crate::error::Result;
use crate::models::Session;
use crate::services::{IdentityProvider, ProviderError};
use crate::storage::{keys, SessionStorage};

/// Authentication lifecycle state.
///
/// `Loading` gates navigation until the initial storage read settles, so no
/// screen decides on a session that merely has not been read yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    Unauthenticated,
    Authenticated(Session),
}

/// Result of a sign-in attempt.
///
/// Cancellation and provider-side contention are expected outcomes; only
/// hard provider failures travel the error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    SignedIn(Session),
    Cancelled,
    InProgress,
    Unavailable,
}

/// Owner of the authenticated-session record.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    provider: Arc<dyn IdentityProvider>,
    state: RwLock<AuthState>,
    token_tx: watch::Sender<Option<String>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>, provider: Arc<dyn IdentityProvider>) -> Self {
        let (token_tx, _) = watch::channel(None);

        Self {
            storage,
            provider,
            state: RwLock::new(AuthState::Loading),
            token_tx,
        }
    }

    /// Load the persisted session, if any.
    ///
    /// Absent, malformed, or unreadable entries all settle as
    /// `Unauthenticated`; none of them is fatal.
    pub async fn load_persisted(&self) {
        let next = match self.storage.read(keys::SESSION).await {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    tracing::info!(user_id = %session.id, "Restored persisted session");
                    AuthState::Authenticated(session)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed persisted session");
                    AuthState::Unauthenticated
                }
            },
            Ok(None) => AuthState::Unauthenticated,
            Err(e) => {
                tracing::warn!(error = %e, "Session storage unreadable, starting unauthenticated");
                AuthState::Unauthenticated
            }
        };

        let token = match &next {
            AuthState::Authenticated(session) => session.token.clone(),
            _ => None,
        };

        *self.state.write().await = next;
        self.token_tx.send_replace(token);
    }

    /// Run the provider sign-in flow and persist the resulting session.
    ///
    /// Recoverable provider outcomes (cancelled, already in progress,
    /// service unavailable) leave state unchanged and are reported as
    /// ordinary outcomes. A persistence failure is logged and the in-memory
    /// session is still made current.
    pub async fn sign_in(&self) -> Result<SignInOutcome> {
        let identity = match self.provider.sign_in().await {
            Ok(identity) => identity,
            Err(ProviderError::Cancelled) => {
                tracing::info!("Sign-in cancelled by the user");
                return Ok(SignInOutcome::Cancelled);
            }
            Err(ProviderError::InProgress) => {
                tracing::info!("Sign-in already in progress");
                return Ok(SignInOutcome::InProgress);
            }
            Err(ProviderError::ServiceUnavailable(reason)) => {
                tracing::warn!(reason = %reason, "Identity service unavailable");
                return Ok(SignInOutcome::Unavailable);
            }
            Err(e) => return Err(e.into()),
        };

        let session = Session {
            id: identity.id,
            email: identity.email,
            name: identity.name,
            picture: identity.photo,
            token: identity.token,
        };

        self.persist(&session).await;

        *self.state.write().await = AuthState::Authenticated(session.clone());
        self.token_tx.send_replace(session.token.clone());

        tracing::info!(user_id = %session.id, "Signed in");
        Ok(SignInOutcome::SignedIn(session))
    }

    /// Sign out, from either origin (native UI or the embedded content's
    /// logout relay).
    ///
    /// Provider sign-out and storage removal are best-effort; the in-memory
    /// session is always cleared so the UI cannot stay stuck authenticated.
    pub async fn sign_out(&self) {
        if let Err(e) = self.provider.sign_out().await {
            tracing::warn!(error = %e, "Provider sign-out failed, continuing");
        }

        if let Err(e) = self.storage.remove(keys::SESSION).await {
            tracing::warn!(error = %e, "Failed to remove persisted session, continuing");
        }

        *self.state.write().await = AuthState::Unauthenticated;
        self.token_tx.send_replace(None);

        tracing::info!("Signed out");
    }

    /// Replace the session token after a refresh and republish it.
    ///
    /// Ignored while unauthenticated.
    pub async fn update_token(&self, token: impl Into<String>) {
        let token = token.into();

        let mut state = self.state.write().await;
        let AuthState::Authenticated(session) = &mut *state else {
            tracing::debug!("Ignoring token update while unauthenticated");
            return;
        };

        session.token = Some(token.clone());
        let session = session.clone();
        drop(state);

        self.persist(&session).await;
        self.token_tx.send_replace(Some(token));
    }

    async fn persist(&self, session: &Session) {
        let raw = match serde_json::to_string(session) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize session");
                return;
            }
        };

        if let Err(e) = self.storage.write(keys::SESSION, &raw).await {
            tracing::warn!(error = %e, "Failed to persist session, keeping it in memory");
        }
    }

    pub async fn state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    pub async fn session(&self) -> Option<Session> {
        match &*self.state.read().await {
            AuthState::Authenticated(session) => Some(session.clone()),
            _ => None,
        }
    }

    /// The current bearer token, for read-only consumers.
    pub async fn token(&self) -> Option<String> {
        self.session().await.and_then(|s| s.token)
    }

    pub async fn is_authenticated(&self) -> bool {
        matches!(&*self.state.read().await, AuthState::Authenticated(_))
    }

    pub async fn is_loading(&self) -> bool {
        matches!(&*self.state.read().await, AuthState::Loading)
    }

    /// Watch the token value; the bridge re-injects its cookie on change.
    pub fn subscribe_token(&self) -> watch::Receiver<Option<String>> {
        self.token_tx.subscribe()
    }
}
