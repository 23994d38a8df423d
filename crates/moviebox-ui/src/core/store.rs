//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.

use crate::core::session::Session;
use crate::features::movies::state::MoviesState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Session restored from storage or produced by the auth pages.
    pub session: SessionSlice,
    /// Movie list state.
    pub movies: MoviesState,
}

/// Shared session state for the UI.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionSlice {
    /// Active session, when signed in.
    pub current: Option<Session>,
    /// Whether storage has been consulted yet; gates render-time redirects.
    pub restored: bool,
}

impl SessionSlice {
    /// Whether a usable session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(Session::has_credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_is_signed_out_and_loading() {
        let store = AppStore::default();
        assert!(!store.session.is_authenticated());
        assert!(!store.session.restored);
        assert!(store.movies.loading);
        assert!(store.movies.visible_ids.is_empty());
    }

    #[test]
    fn blank_tokens_do_not_authenticate() {
        let slice = SessionSlice {
            current: Some(Session {
                token: "  ".to_string(),
                name: None,
                email: None,
                guest: false,
            }),
            restored: true,
        };
        assert!(!slice.is_authenticated());
    }
}
