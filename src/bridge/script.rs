// SPDX-License-Identifier: MIT

//! Injectable script builders.
//!
//! The scripts run inside the embedded content's execution context. They
//! post back through `window.nativeShell.postMessage` (installed by the
//! rendering surface) and expose `window.nativeApp` to page code.

use crate::bridge::cookie::AUTH_COOKIE_MAX_AGE_SECS;

/// Marker attribute: any clicked element carrying `data-action="logout"`
/// triggers a native logout.
pub const LOGOUT_ACTION: &str = "logout";

/// Full bridge script, injected before initial content parsing and again
/// after every load.
///
/// Sets the auth cookie (skipped when there is no cookie value), posts a
/// `COOKIE_CHECK` snapshot, installs `window.nativeApp` and the page-wide
/// logout click listener.
pub fn bridge_script(cookie_name: &str, cookie_value: Option<&str>) -> String {
    let set_cookie = match cookie_value {
        Some(value) if !value.is_empty() => format!(
            "document.cookie = \"{cookie_name}={value}; path=/; max-age={AUTH_COOKIE_MAX_AGE_SECS};\";"
        ),
        _ => String::new(),
    };

    format!(
        r#"
    (function() {{
      {set_cookie}

      window.nativeShell.postMessage(JSON.stringify({{
        type: 'COOKIE_CHECK',
        cookies: document.cookie
      }}));

      window.nativeApp = {{
        logout: function() {{
          window.nativeShell.postMessage(JSON.stringify({{
            type: 'LOGOUT'
          }}));
        }},
        sendMessage: function(messageType, data) {{
          window.nativeShell.postMessage(JSON.stringify({{
            type: messageType,
            data: data
          }}));
        }}
      }};

      document.addEventListener('click', function(e) {{
        if (e.target && e.target.dataset && e.target.dataset.action === '{LOGOUT_ACTION}') {{
          window.nativeApp.logout();
        }}
      }});

      true;
    }})();
    "#
    )
}

/// Re-set the auth cookie on an already-loaded page, without a reload.
pub fn cookie_update_script(cookie_name: &str, cookie_value: &str) -> String {
    format!(
        "document.cookie = \"{cookie_name}={cookie_value}; path=/; max-age={AUTH_COOKIE_MAX_AGE_SECS};\";\ntrue;"
    )
}

/// Expire the auth cookie immediately.
pub fn cookie_clear_script(cookie_name: &str) -> String {
    format!(
        "document.cookie = \"{cookie_name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT\";\ntrue;"
    )
}
