// SPDX-License-Identifier: MIT

//! Google sign-in integration.
//!
//! The interactive part of the OAuth handshake belongs to the host platform
//! and is injected as a [`SignInPrompt`]; this module turns the resulting
//! access token into a user profile via the `oauth2/v3/userinfo` endpoint,
//! prechecks service availability against the OpenID discovery document,
//! and revokes the token on sign-out.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::Config;

const DISCOVERY_URL: &str = "https://accounts.google.com/.well-known/openid-configuration";
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";
const REVOKE_URL: &str = "https://oauth2.googleapis.com/revoke";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Profile fields and token returned by a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderIdentity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub photo: Option<String>,
    /// Opaque bearer token for downstream consumers
    pub token: Option<String>,
}

/// Identity-provider error categories.
///
/// `Cancelled`, `InProgress` and `ServiceUnavailable` are expected outcomes
/// of an interactive sign-in, not failures; callers leave state unchanged
/// and log them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("sign-in cancelled by the user")]
    Cancelled,

    #[error("a sign-in is already in progress")]
    InProgress,

    #[error("identity service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("provider rejected the request: {0}")]
    Rejected(String),
}

impl ProviderError {
    /// Whether this outcome is expected and recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ProviderError::Cancelled
                | ProviderError::InProgress
                | ProviderError::ServiceUnavailable(_)
        )
    }
}

/// External identity provider.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Precheck that the provider is reachable before prompting.
    async fn ensure_available(&self) -> Result<(), ProviderError>;

    /// Run the sign-in flow and return the user's profile and token.
    async fn sign_in(&self) -> Result<ProviderIdentity, ProviderError>;

    /// Invalidate provider-side session state. Best-effort.
    async fn sign_out(&self) -> Result<(), ProviderError>;
}

/// Host-supplied interactive step: surfaces the provider's sign-in UI and
/// resolves with an access token.
#[async_trait::async_trait]
pub trait SignInPrompt: Send + Sync {
    async fn prompt(&self) -> Result<String, ProviderError>;
}

/// Google identity provider.
pub struct GoogleSignIn {
    http: reqwest::Client,
    web_client_id: String,
    prompt: Arc<dyn SignInPrompt>,
    /// Access token from the most recent sign-in, kept for revocation.
    issued_token: Mutex<Option<String>>,
}

impl GoogleSignIn {
    /// Configure the provider from application config.
    pub fn new(config: &Config, prompt: Arc<dyn SignInPrompt>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .context("failed building Google sign-in HTTP client")?;

        tracing::info!(
            web_client_id = %config.google_web_client_id,
            ios_client_id = config.google_ios_client_id.as_deref().unwrap_or("<none>"),
            "Configured Google sign-in"
        );

        Ok(Self {
            http,
            web_client_id: config.google_web_client_id.clone(),
            prompt,
            issued_token: Mutex::new(None),
        })
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<ProviderIdentity, ProviderError> {
        let response = self
            .http
            .get(USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("userinfo request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ProviderError::Rejected(format!(
                "userinfo returned status {}",
                response.status()
            )));
        }

        let info: UserInfo = response
            .json()
            .await
            .map_err(|e| ProviderError::Rejected(format!("invalid userinfo JSON: {e}")))?;

        Ok(ProviderIdentity {
            id: info.sub,
            email: info.email.unwrap_or_default(),
            name: info.name.unwrap_or_default(),
            photo: info.picture,
            token: Some(access_token.to_string()),
        })
    }
}

#[async_trait::async_trait]
impl IdentityProvider for GoogleSignIn {
    async fn ensure_available(&self) -> Result<(), ProviderError> {
        let response = self.http.get(DISCOVERY_URL).send().await.map_err(|e| {
            ProviderError::ServiceUnavailable(format!("discovery request failed: {e}"))
        })?;

        if !response.status().is_success() {
            return Err(ProviderError::ServiceUnavailable(format!(
                "discovery returned status {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn sign_in(&self) -> Result<ProviderIdentity, ProviderError> {
        self.ensure_available().await?;

        let access_token = self.prompt.prompt().await?;

        tracing::debug!(client_id = %self.web_client_id, "Fetching Google profile");
        let identity = self.fetch_profile(&access_token).await?;

        *self.issued_token.lock().await = Some(access_token);
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        // Revoking an absent token is a no-op.
        let Some(token) = self.issued_token.lock().await.take() else {
            return Ok(());
        };

        let response = self
            .http
            .post(REVOKE_URL)
            .form(&[("token", token.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::Network(format!("revoke request failed: {e}")))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Google token revocation failed");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NeverPrompt;

    #[async_trait::async_trait]
    impl SignInPrompt for NeverPrompt {
        async fn prompt(&self) -> Result<String, ProviderError> {
            Err(ProviderError::Cancelled)
        }
    }

    #[test]
    fn recoverable_errors_are_classified() {
        assert!(ProviderError::Cancelled.is_recoverable());
        assert!(ProviderError::InProgress.is_recoverable());
        assert!(ProviderError::ServiceUnavailable("down".to_string()).is_recoverable());

        assert!(!ProviderError::Network("dns".to_string()).is_recoverable());
        assert!(!ProviderError::Rejected("401".to_string()).is_recoverable());
    }

    #[tokio::test]
    async fn configure_builds_a_provider() {
        let config = Config::default();
        let provider = GoogleSignIn::new(&config, Arc::new(NeverPrompt)).unwrap();

        // No token issued yet, so provider-side sign-out is a no-op.
        provider.sign_out().await.unwrap();
    }

    #[test]
    fn userinfo_parses_the_v3_shape() {
        let info: UserInfo = serde_json::from_str(
            r#"{"sub":"100523868530398144666","email":"user@example.com","name":"User","picture":"https://example.com/p.png","email_verified":true}"#,
        )
        .unwrap();

        assert_eq!(info.sub, "100523868530398144666");
        assert_eq!(info.email.as_deref(), Some("user@example.com"));
        assert_eq!(info.picture.as_deref(), Some("https://example.com/p.png"));
    }
}
