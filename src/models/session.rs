// SPDX-License-Identifier: MIT

//! Authenticated-session record.

use serde::{Deserialize, Serialize};

/// The authenticated user's identity record.
///
/// A `Session` exists if and only if the user is authenticated; it is
/// persisted as JSON under a fixed storage key and reloaded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Stable user identifier from the identity provider
    pub id: String,
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Profile picture URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Opaque bearer token, when the provider issued one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
