// SPDX-License-Identifier: MIT

//! Haeya Shell: native application-shell core for the Haeya web portal.
//!
//! This crate authenticates a user through Google sign-in, persists the
//! session locally, and keeps an embedded web surface's auth cookie in sync
//! with that session. The interactive sign-in step and the rendering surface
//! are host-platform capabilities injected through traits.

pub mod bridge;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod shell;
pub mod storage;

use std::sync::Arc;

use config::Config;
use session::SessionStore;

/// Shared application state owned by the host.
pub struct AppState {
    pub config: Config,
    pub session: Arc<SessionStore>,
}

/// Initialize logging for the host process.
///
/// Hosts embedding this crate should call this once at startup; log levels
/// are controlled through `RUST_LOG`.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("haeya_shell=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
