//! Shared handle to the collection-service client.
//!
//! # Design
//! - One client per app boot; views reach it through this context handle.
//! - Session changes retarget the bearer token in place, so component trees
//!   holding the handle never see a stale client.

use crate::core::session::Session;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Context handle giving components access to the API client.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Build the handle around a client for the given base URL.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }

    /// The shared client, for moving into async blocks.
    pub(crate) fn client(&self) -> Rc<ApiClient> {
        Rc::clone(&self.client)
    }

    /// Align the client's bearer token with the active session, if any.
    pub(crate) fn adopt_session(&self, session: Option<&Session>) {
        self.client
            .set_token(session.map(|session| session.token.clone()));
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
