//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the navbar and sidebar to decide which navigation actions to offer.
//! This is a mock session: the credential comparison itself happens in the
//! login page, and this store only records the outcome. There is no token,
//! no expiry, and no server-side enforcement.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as recorded by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Authentication state: a binary machine from anonymous to authenticated
/// and back.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
}

impl AuthState {
    /// Record a successful login.
    pub fn login(&mut self, user: UserProfile) {
        self.is_authenticated = true;
        self.user = Some(user);
    }

    /// Return to the initial anonymous state.
    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.user = None;
    }
}
