//! Shell navigation glue.
//!
//! The host owns the actual screen stack; this module only decides where it
//! should go, gated on the tri-state auth lifecycle so nothing navigates
//! while the persisted session is still being read.

use crate::session::AuthState;

/// Top-level routes of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
}

/// Host navigation seam.
pub trait Navigator: Send + Sync {
    /// Replace the current route.
    fn replace(&self, route: Route);
}

/// Where the shell should navigate given the auth state, or `None` to stay.
///
/// No decision is made while `Loading`; the initial storage read settles
/// first.
pub fn route_for(state: &AuthState, current: Route) -> Option<Route> {
    match state {
        AuthState::Loading => None,
        AuthState::Unauthenticated => (current != Route::Login).then_some(Route::Login),
        AuthState::Authenticated(_) => (current == Route::Login).then_some(Route::Home),
    }
}
