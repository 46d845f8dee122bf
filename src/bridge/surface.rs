// SPDX-License-Identifier: MIT

//! Rendering-surface seam.

/// Script-injection failure. Non-fatal everywhere: injection is idempotent
/// and reattempted on the next load-end event.
#[derive(Debug, thiserror::Error)]
#[error("script injection failed: {0}")]
pub struct SurfaceError(pub String);

/// An embedded web-rendering surface (a webview).
///
/// Implementations must expose `window.nativeShell.postMessage(payload)`
/// inside the page before any injected script runs, and forward each posted
/// payload string to [`WebViewBridge::on_message`].
///
/// [`WebViewBridge::on_message`]: crate::bridge::WebViewBridge::on_message
pub trait RenderingSurface: Send + Sync {
    /// Navigate the surface to `uri`.
    fn load(&self, uri: &str);

    /// Evaluate `script` in the current page.
    fn inject_script(&self, script: &str) -> Result<(), SurfaceError>;
}
