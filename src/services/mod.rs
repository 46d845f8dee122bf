// SPDX-License-Identifier: MIT

//! Services module - external collaborators behind traits.

pub mod google;

pub use google::{
    GoogleSignIn, IdentityProvider, ProviderError, ProviderIdentity, SignInPrompt,
};
