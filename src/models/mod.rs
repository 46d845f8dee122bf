// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod message;
pub mod session;

pub use message::BridgeMessage;
pub use session::Session;
