// SPDX-License-Identifier: MIT

//! The webview bridge.
//!
//! Holds a read-only snapshot of the session token, rebuilds the cookie
//! payload when it changes, and relays messages from the embedded content.
//! The only mutation it ever requests is `SessionStore::sign_out`, through
//! the `LOGOUT` relay path.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::bridge::cookie::{auth_cookie_name, CookiePayload};
use crate::bridge::script;
use crate::bridge::surface::RenderingSurface;
use crate::models::BridgeMessage;
use crate::session::SessionStore;
use crate::shell::{Navigator, Route};

/// Host-supplied logout hook. When present it replaces the fallback
/// navigation to the sign-in route.
pub type LogoutCallback = Box<dyn Fn() + Send + Sync>;

/// Bridge between the session store and an embedded web surface.
pub struct WebViewBridge {
    surface: Arc<dyn RenderingSurface>,
    store: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    uri: String,
    cookie_name: String,
    secondary: Option<String>,
    token: RwLock<Option<String>>,
    on_logout: Option<LogoutCallback>,
}

impl WebViewBridge {
    /// Create a bridge for `uri` with the current token as its read-only
    /// construction input. `project_ref` names the portal auth cookie.
    pub fn new(
        surface: Arc<dyn RenderingSurface>,
        store: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
        uri: impl Into<String>,
        token: Option<String>,
        project_ref: &str,
    ) -> Self {
        Self {
            surface,
            store,
            navigator,
            uri: uri.into(),
            cookie_name: auth_cookie_name(project_ref),
            secondary: None,
            token: RwLock::new(token),
            on_logout: None,
        }
    }

    /// Install a logout hook, replacing the fallback navigation.
    pub fn on_logout(mut self, callback: LogoutCallback) -> Self {
        self.on_logout = Some(callback);
        self
    }

    /// Carry an opaque value in the cookie payload's second slot.
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    fn cookie_value(&self, token: &str) -> String {
        let mut payload = CookiePayload::new(token);
        if let Some(secondary) = &self.secondary {
            payload = payload.with_secondary(secondary.clone());
        }
        payload.encode()
    }

    /// The full bridge script for the current token. Hosts whose surface
    /// supports a before-content-load script should install this one.
    pub async fn injection_script(&self) -> String {
        let value = self.token.read().await.as_deref().map(|t| self.cookie_value(t));
        script::bridge_script(&self.cookie_name, value.as_deref())
    }

    /// Navigate the surface to the portal and inject the bridge script.
    pub async fn render(&self) {
        self.surface.load(&self.uri);
        self.inject(&self.injection_script().await);
    }

    /// Re-inject the full script after a navigation; cookie and bridge
    /// state do not survive a page load inside the surface.
    pub async fn on_load_end(&self) {
        self.inject(&self.injection_script().await);
    }

    /// Refresh the cookie on the already-loaded page after a token change,
    /// without a reload. A `None` token clears the cookie.
    pub async fn on_token_change(&self, token: Option<String>) {
        let script = match &token {
            Some(t) => {
                let value = self.cookie_value(t);
                script::cookie_update_script(&self.cookie_name, &value)
            }
            None => script::cookie_clear_script(&self.cookie_name),
        };

        *self.token.write().await = token;
        self.inject(&script);
    }

    /// Follow the store's token watch channel, refreshing the cookie on
    /// every change. Runs until the store is dropped.
    pub async fn run_token_sync(&self) {
        let mut rx = self.store.subscribe_token();

        while rx.changed().await.is_ok() {
            let token = rx.borrow_and_update().clone();
            self.on_token_change(token).await;
        }
    }

    /// Dispatch a raw payload from the surface's message channel.
    ///
    /// Malformed payloads are logged and discarded; nothing here raises
    /// past the bridge boundary.
    pub async fn on_message(&self, raw: &str) {
        let message = match BridgeMessage::parse(raw) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed bridge message");
                return;
            }
        };

        match message {
            BridgeMessage::Logout => self.handle_logout().await,
            BridgeMessage::CookieCheck { cookies } => {
                tracing::debug!(cookies = cookies.as_deref().unwrap_or(""), "Cookie check");
            }
            BridgeMessage::Error { error } => {
                tracing::warn!(
                    error = error.as_deref().unwrap_or("<unspecified>"),
                    "Embedded content reported an error"
                );
            }
            BridgeMessage::Other { kind, data } => {
                tracing::debug!(kind = %kind, data = ?data, "Unhandled bridge message");
            }
        }
    }

    /// Logout relayed from the embedded content: clear the page cookie,
    /// sign out natively, then hand control to the logout hook or fall back
    /// to the sign-in route. Exactly one of the two runs.
    async fn handle_logout(&self) {
        tracing::info!("Logout requested by embedded content");

        self.inject(&script::cookie_clear_script(&self.cookie_name));
        *self.token.write().await = None;

        self.store.sign_out().await;

        match &self.on_logout {
            Some(callback) => callback(),
            None => self.navigator.replace(Route::Login),
        }
    }

    fn inject(&self, script: &str) {
        if let Err(e) = self.surface.inject_script(script) {
            tracing::warn!(error = %e, "Script injection failed, will retry on next load");
        }
    }
}
