// SPDX-License-Identifier: MIT

//! Embedded-content bridge.
//!
//! Owns the rendering-surface handle, keeps the portal's auth cookie in
//! sync with the session token, and relays messages from the embedded
//! content back to native code.

pub mod cookie;
pub mod script;
pub mod surface;
pub mod webview;

pub use cookie::{auth_cookie_name, CookiePayload, AUTH_COOKIE_MAX_AGE_SECS};
pub use surface::{RenderingSurface, SurfaceError};
pub use webview::WebViewBridge;
