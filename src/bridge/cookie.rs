// SPDX-License-Identifier: MIT

//! Auth-cookie payload encoding.
//!
//! The portal's backend parses its session cookie as a percent-encoded JSON
//! array of exactly five elements `[token, secondary, null, null, null]`.
//! That shape is a format contract; deviating from it breaks session
//! recognition on the portal side.

/// Cookie lifetime: one year.
pub const AUTH_COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Name of the portal session cookie for a given project ref.
pub fn auth_cookie_name(project_ref: &str) -> String {
    format!("sb-{project_ref}-auth-token")
}

/// The session token re-encoded for the portal's cookie convention.
///
/// Derived from the live token whenever it changes; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookiePayload {
    token: String,
    secondary: Option<String>,
}

impl CookiePayload {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secondary: None,
        }
    }

    /// Carry the opaque second slot. Its meaning belongs to the portal's
    /// session parser; this crate never interprets it.
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// Percent-encoded cookie value.
    ///
    /// A token that already contains a `%` is treated as pre-encoded and
    /// passed through unchanged, so re-encoding cannot double-encode. An
    /// empty token encodes to the empty string.
    pub fn encode(&self) -> String {
        if self.token.is_empty() {
            return String::new();
        }

        if self.token.contains('%') {
            return self.token.clone();
        }

        let array = serde_json::json!([self.token, self.secondary, null, null, null]);
        urlencoding::encode(&array.to_string()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(value: &str) -> serde_json::Value {
        let json = urlencoding::decode(value).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn encode_produces_five_slot_array() {
        let encoded = CookiePayload::new("abc123").encode();
        let array = decode(&encoded);

        assert_eq!(array.as_array().unwrap().len(), 5);
        assert_eq!(array[0], "abc123");
        assert!(array[1].is_null());
        assert!(array[2].is_null());
        assert!(array[3].is_null());
        assert!(array[4].is_null());
    }

    #[test]
    fn encode_round_trips_the_token() {
        let token = "eyJhbGciOiJIUzI1NiJ9.payload.sig";
        let encoded = CookiePayload::new(token).encode();

        assert_eq!(decode(&encoded)[0], token);
    }

    #[test]
    fn pre_encoded_token_passes_through() {
        assert_eq!(CookiePayload::new("abc%20").encode(), "abc%20");

        let already = "%5B%22abc%22%2Cnull%2Cnull%2Cnull%2Cnull%5D";
        assert_eq!(CookiePayload::new(already).encode(), already);
    }

    #[test]
    fn empty_token_encodes_empty() {
        assert_eq!(CookiePayload::new("").encode(), "");
    }

    #[test]
    fn secondary_slot_is_carried_opaquely() {
        let encoded = CookiePayload::new("tok")
            .with_secondary("vdvveodgxluy")
            .encode();
        let array = decode(&encoded);

        assert_eq!(array[0], "tok");
        assert_eq!(array[1], "vdvveodgxluy");
        assert!(array[2].is_null());
    }

    #[test]
    fn cookie_name_follows_the_convention() {
        assert_eq!(auth_cookie_name("myref"), "sb-myref-auth-token");
    }
}
