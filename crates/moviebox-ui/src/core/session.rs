//! Session primitives shared across the UI.
//!
//! # Design
//! - Keep the session as simple data so callers can store/clear it without
//!   side effects.
//! - Leave header encoding to transport clients to keep core DOM-free.

use moviebox_api_models::AuthPayload;
use serde::{Deserialize, Serialize};

/// Active session for the signed-in (or guest) user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Opaque token issued by the auth endpoints.
    pub token: String,
    /// Display name, when known.
    pub name: Option<String>,
    /// Account email, when known.
    pub email: Option<String>,
    /// Whether this is a guest session.
    pub guest: bool,
}

impl Session {
    /// Whether this session carries a usable token.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Name shown in the navigation greeting.
    ///
    /// Falls back to the local part of the email, then to a generic label,
    /// matching what the auth pages store.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.email.as_deref().and_then(name_from_email))
            .unwrap_or_else(|| "Movie Lover".to_string())
    }
}

/// Build a session from an auth response, filling profile gaps from the
/// email the user submitted.
#[must_use]
pub fn session_from_auth(payload: AuthPayload, fallback_email: Option<&str>) -> Session {
    let email = payload
        .email
        .or_else(|| fallback_email.map(ToString::to_string));
    let name = payload
        .name
        .or_else(|| email.as_deref().and_then(name_from_email));
    Session {
        token: payload.token,
        name,
        email,
        guest: payload.guest,
    }
}

/// Derive a display name from an email's local part.
#[must_use]
pub fn name_from_email(email: &str) -> Option<String> {
    let local = email.split('@').next().unwrap_or_default();
    if local.is_empty() {
        None
    } else {
        Some(local.to_string())
    }
}

/// Profile blob persisted under the `user` storage key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Display name, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account email, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Guest marker stored by the guest login flow.
    #[serde(rename = "isGuest", skip_serializing_if = "Option::is_none")]
    pub is_guest: Option<bool>,
}

impl From<&Session> for StoredProfile {
    fn from(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            email: session.email.clone(),
            is_guest: session.guest.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            guest: false,
        }
    }

    #[test]
    fn credentials_require_non_empty_token() {
        assert!(session().has_credentials());
        let mut blank = session();
        blank.token = "   ".to_string();
        assert!(!blank.has_credentials());
    }

    #[test]
    fn display_name_prefers_stored_name() {
        assert_eq!(session().display_name(), "Ada");
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let mut anon = session();
        anon.name = None;
        assert_eq!(anon.display_name(), "ada");
        anon.email = None;
        assert_eq!(anon.display_name(), "Movie Lover");
    }

    #[test]
    fn auth_conversion_fills_gaps_from_the_submitted_email() {
        let payload = AuthPayload {
            token: "tok".to_string(),
            name: None,
            email: None,
            guest: false,
        };
        let session = session_from_auth(payload, Some("ada@example.com"));
        assert_eq!(session.email.as_deref(), Some("ada@example.com"));
        assert_eq!(session.name.as_deref(), Some("ada"));

        let named = AuthPayload {
            token: "tok".to_string(),
            name: Some("Ada".to_string()),
            email: Some("server@example.com".to_string()),
            guest: false,
        };
        let session = session_from_auth(named, Some("ignored@example.com"));
        assert_eq!(session.email.as_deref(), Some("server@example.com"));
        assert_eq!(session.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn stored_profile_round_trips_guest_marker() {
        let mut guest = session();
        guest.guest = true;
        let profile = StoredProfile::from(&guest);
        let raw = serde_json::to_string(&profile).unwrap();
        assert!(raw.contains("\"isGuest\":true"));
        let back: StoredProfile = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.is_guest, Some(true));
    }
}
