// SPDX-License-Identifier: MIT

//! Messages relayed from the embedded web content.
//!
//! Wire format: a JSON object `{type, data?, cookies?, error?}` sent as a
//! single string over the surface's message channel. Unknown type tags are
//! kept as [`BridgeMessage::Other`] so newer portal builds can talk to an
//! older shell.

use serde::Deserialize;

/// A structured event sent from the embedded content to native code.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeMessage {
    /// The page requested a native logout.
    Logout,
    /// Diagnostic snapshot of the page's cookie string.
    CookieCheck { cookies: Option<String> },
    /// The page reported an error.
    Error { error: Option<String> },
    /// Any other type tag, kept for forward compatibility.
    Other {
        kind: String,
        data: Option<serde_json::Value>,
    },
}

/// Raw wire shape; dispatching into the variants happens after parsing.
#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    cookies: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl BridgeMessage {
    /// Parse a raw message-channel payload.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let raw: RawMessage = serde_json::from_str(raw)?;

        Ok(match raw.kind.as_str() {
            "LOGOUT" => BridgeMessage::Logout,
            "COOKIE_CHECK" => BridgeMessage::CookieCheck {
                cookies: raw.cookies,
            },
            "ERROR" => BridgeMessage::Error { error: raw.error },
            _ => BridgeMessage::Other {
                kind: raw.kind,
                data: raw.data,
            },
        })
    }
}
