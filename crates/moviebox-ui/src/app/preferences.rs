//! Persistence and environment helpers for the app shell.
//!
//! The storage keys match what the collection service's other clients write,
//! so an existing signed-in browser keeps its session across a swap.

use crate::core::session::{Session, StoredProfile};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;
use web_sys::Url;

pub(crate) const TOKEN_KEY: &str = "token";
pub(crate) const USER_KEY: &str = "user";
pub(crate) const IS_AUTHENTICATED_KEY: &str = "isAuthenticated";
pub(crate) const USER_NAME_KEY: &str = "userName";
pub(crate) const USER_EMAIL_KEY: &str = "userEmail";
pub(crate) const IS_GUEST_KEY: &str = "isGuest";
pub(crate) const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";
pub(crate) const REMEMBER_ME_KEY: &str = "rememberMe";

/// Restore the persisted session, if storage holds a usable one.
pub(crate) fn load_session() -> Option<Session> {
    let authenticated = LocalStorage::get::<bool>(IS_AUTHENTICATED_KEY).unwrap_or(false);
    let token = LocalStorage::get::<String>(TOKEN_KEY).ok()?;
    if !authenticated || token.trim().is_empty() {
        return None;
    }
    let profile = LocalStorage::get::<StoredProfile>(USER_KEY).unwrap_or_default();
    let name = profile
        .name
        .or_else(|| LocalStorage::get::<String>(USER_NAME_KEY).ok());
    let email = profile
        .email
        .or_else(|| LocalStorage::get::<String>(USER_EMAIL_KEY).ok());
    let guest = profile
        .is_guest
        .unwrap_or_else(|| LocalStorage::get::<bool>(IS_GUEST_KEY).unwrap_or(false));
    Some(Session {
        token,
        name,
        email,
        guest,
    })
}

/// Persist every key the session gate reads at page load.
pub(crate) fn persist_session(session: &Session) {
    set_storage(TOKEN_KEY, &session.token);
    set_storage(USER_KEY, StoredProfile::from(session));
    set_storage(IS_AUTHENTICATED_KEY, true);
    set_storage(USER_NAME_KEY, session.display_name());
    if let Some(email) = &session.email {
        set_storage(USER_EMAIL_KEY, email);
    } else {
        delete_storage(USER_EMAIL_KEY);
    }
    if session.guest {
        set_storage(IS_GUEST_KEY, true);
    } else {
        delete_storage(IS_GUEST_KEY);
    }
}

/// Drop every session-related key; used by logout.
pub(crate) fn clear_session() {
    for key in [
        TOKEN_KEY,
        USER_KEY,
        IS_AUTHENTICATED_KEY,
        USER_NAME_KEY,
        USER_EMAIL_KEY,
        IS_GUEST_KEY,
        REMEMBERED_EMAIL_KEY,
        REMEMBER_ME_KEY,
    ] {
        delete_storage(key);
    }
}

/// Email to prefill on the login page, when remember-me was left on.
pub(crate) fn remembered_email() -> Option<String> {
    if !LocalStorage::get::<bool>(REMEMBER_ME_KEY).unwrap_or(false) {
        return None;
    }
    LocalStorage::get::<String>(REMEMBERED_EMAIL_KEY)
        .ok()
        .filter(|email| !email.is_empty())
}

/// Record (or forget) the remember-me email after a successful login.
pub(crate) fn persist_remembered_email(email: &str, remember: bool) {
    if remember {
        set_storage(REMEMBERED_EMAIL_KEY, email);
        set_storage(REMEMBER_ME_KEY, true);
    } else {
        delete_storage(REMEMBERED_EMAIL_KEY);
        delete_storage(REMEMBER_ME_KEY);
    }
}

/// Base URL for the collection service.
///
/// Derived from the page origin; the dev-server ports map onto the service's
/// local default so `trunk serve` works against a local backend.
pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:5000".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "3000" | "8080" => Some("5000"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:5000".to_string()
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
