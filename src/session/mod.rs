// SPDX-License-Identifier: MIT

//! Session lifecycle: the tri-state auth machine and its durable persistence.

pub mod store;

pub use store::{AuthState, SessionStore, SignInOutcome};
