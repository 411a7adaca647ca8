#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current account and loading status.
///
/// Provided as an `RwSignal` context by the root component; `user` mirrors
/// the cached profile in [`crate::state::session`].
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Seed the reactive state from the persisted session.
    pub fn from_session() -> Self {
        Self { user: crate::state::session::user(), loading: false }
    }
}
