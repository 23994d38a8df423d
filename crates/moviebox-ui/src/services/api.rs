//! HTTP client for the collection service (REST).
//!
//! # Design
//! - One request per operation; no retry, batching, or caching.
//! - Non-2xx responses surface the body's error field when it has one.
//! - Envelope and auth-payload normalisation is delegated to
//!   `moviebox-api-models` so the loose wire shapes stay in one place.

use crate::core::logic::{list_path, movie_path, search_path};
use anyhow::anyhow;
use gloo_net::http::{Request, Response};
use moviebox_api_models::{
    AuthPayload, ForgotPasswordRequest, LoginRequest, Movie, MovieDraft, RegisterRequest,
    ResetPasswordRequest, extract_error_message, normalize_movie_list, parse_auth_payload,
};
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;

/// Client for the collection and auth endpoints.
#[derive(Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    token: RefCell<Option<String>>,
}

impl ApiClient {
    /// Create a client against the given base URL.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: RefCell::new(None),
        }
    }

    /// Swap the session token without rebuilding the client.
    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token.filter(|t| !t.trim().is_empty());
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn bearer(&self) -> Option<String> {
        self.token
            .borrow()
            .as_ref()
            .map(|token| format!("Bearer {token}"))
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(&self, path: &str) -> anyhow::Result<T> {
        let mut req = Request::get(&self.url(path));
        if let Some(header) = self.bearer() {
            req = req.header("Authorization", &header);
        }
        decode(req.send().await?).await
    }

    async fn send_json<B: Serialize>(
        &self,
        req: Request,
        body: &B,
    ) -> anyhow::Result<Response> {
        Ok(req.json(body)?.send().await?)
    }

    /// Fetch the full collection, normalising whatever envelope comes back.
    pub(crate) async fn list_movies(&self) -> anyhow::Result<Vec<Movie>> {
        let body: Value = self.get_json(list_path()).await?;
        Ok(normalize_movie_list(body))
    }

    /// Server-side search over the collection.
    pub(crate) async fn search_movies(&self, query: &str) -> anyhow::Result<Vec<Movie>> {
        let body: Value = self.get_json(&search_path(query)).await?;
        Ok(normalize_movie_list(body))
    }

    /// Fetch a single record by id.
    pub(crate) async fn get_movie(&self, id: &str) -> anyhow::Result<Movie> {
        self.get_json(&movie_path(id)).await
    }

    /// Create a record; the service returns the stored copy with its id.
    pub(crate) async fn create_movie(&self, draft: &MovieDraft) -> anyhow::Result<Movie> {
        let mut req = Request::post(&self.url(list_path()));
        if let Some(header) = self.bearer() {
            req = req.header("Authorization", &header);
        }
        decode(self.send_json(req, draft).await?).await
    }

    /// Replace a record; the service returns the stored copy.
    pub(crate) async fn update_movie(&self, id: &str, draft: &MovieDraft) -> anyhow::Result<Movie> {
        let mut req = Request::put(&self.url(&movie_path(id)));
        if let Some(header) = self.bearer() {
            req = req.header("Authorization", &header);
        }
        decode(self.send_json(req, draft).await?).await
    }

    /// Delete a record by id.
    pub(crate) async fn delete_movie(&self, id: &str) -> anyhow::Result<()> {
        let mut req = Request::delete(&self.url(&movie_path(id)));
        if let Some(header) = self.bearer() {
            req = req.header("Authorization", &header);
        }
        expect_ok(req.send().await?).await
    }

    /// Exchange credentials for a session token.
    pub(crate) async fn login(&self, request: &LoginRequest) -> anyhow::Result<AuthPayload> {
        let req = Request::post(&self.url("/api/auth/login"));
        let body: Value = decode(self.send_json(req, request).await?).await?;
        auth_payload(&body)
    }

    /// Create an account and receive its first session token.
    pub(crate) async fn register(&self, request: &RegisterRequest) -> anyhow::Result<AuthPayload> {
        let req = Request::post(&self.url("/api/auth/register"));
        let body: Value = decode(self.send_json(req, request).await?).await?;
        auth_payload(&body)
    }

    /// Request an anonymous guest session.
    pub(crate) async fn guest_login(&self) -> anyhow::Result<AuthPayload> {
        let response = Request::post(&self.url("/api/auth/guest"))
            .header("Content-Type", "application/json")
            .send()
            .await?;
        let body: Value = decode(response).await?;
        auth_payload(&body)
    }

    /// Ask the service to email reset instructions.
    pub(crate) async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> anyhow::Result<()> {
        let req = Request::post(&self.url("/api/auth/forgot-password"));
        expect_ok(self.send_json(req, request).await?).await
    }

    /// Complete a password reset with the emailed token.
    pub(crate) async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> anyhow::Result<()> {
        let req = Request::post(&self.url("/api/auth/reset-password"));
        expect_ok(self.send_json(req, request).await?).await
    }
}

fn auth_payload(body: &Value) -> anyhow::Result<AuthPayload> {
    parse_auth_payload(body).ok_or_else(|| anyhow!("No authentication token received"))
}

async fn decode<T: for<'de> serde::Deserialize<'de>>(response: Response) -> anyhow::Result<T> {
    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

async fn expect_ok(response: Response) -> anyhow::Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(response_error(response).await)
    }
}

async fn response_error(response: Response) -> anyhow::Error {
    let status = response.status();
    let detail = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| extract_error_message(&body))
        .unwrap_or_else(|| response.status_text());
    anyhow!("request failed ({status}): {detail}")
}
