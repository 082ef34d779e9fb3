//! Authentication session state shared across the application.
//!
//! ERROR HANDLING
//! ==============
//! Storage writes are fire-and-forget; a failed localStorage write leaves
//! the in-memory session authoritative for the current page lifetime.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update};

use crate::state::token_store;

/// The current user's authentication status and identity.
///
/// A present token defines "authenticated"; without one the identity
/// fields carry no authority for authorization decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub email: Option<String>,
}

impl Session {
    /// A fully-identified session produced by login or registration.
    pub fn authenticated(token: String, user_id: Option<String>, email: Option<String>) -> Self {
        Self {
            token: Some(token),
            user_id,
            email,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The signed-in user's numeric id, when the backend provided one.
    pub fn user_id_num(&self) -> Option<i64> {
        self.user_id.as_deref().and_then(|raw| raw.parse().ok())
    }
}

/// Authentication state tracking the current session and loading status.
///
/// Provided app-wide as an `RwSignal<AuthState>` context, seeded from the
/// token store at startup.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl AuthState {
    /// Replace the session wholesale (login or registration).
    pub fn log_in(&mut self, session: Session) {
        self.session = session;
    }

    /// Reset the session to all-absent.
    pub fn log_out(&mut self) {
        self.session = Session::default();
    }
}

/// Persist `session` and make it current.
///
/// The storage write happens before the signal update so a re-render that
/// observes the new state never reads a stale store.
pub fn log_in(auth: RwSignal<AuthState>, session: Session) {
    token_store::save(&session);
    auth.update(move |state| state.log_in(session));
}

/// Clear persisted credentials and reset the in-memory session.
///
/// In-flight requests are not invalidated; one issued before logout may
/// still complete against the old token.
pub fn log_out(auth: RwSignal<AuthState>) {
    token_store::clear();
    auth.update(AuthState::log_out);
}
