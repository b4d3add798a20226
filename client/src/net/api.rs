//! REST API helpers for communicating with the backend.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Host build: stubs returning [`ApiError::Unavailable`] so the crate compiles
//! and unit-tests natively.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers turn failures into toasts;
//! nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

use super::types::{AdminUser, Contest, LoginResponse, Problem};
use crate::forms::contest::ContestPayload;
use crate::forms::login::LoginPayload;
use crate::forms::problem::NewProblem;
use crate::forms::register::RegisterPayload;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Called outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for an error toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, server_message: Option<String>) -> ApiError {
    let message = server_message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Status { status, message }
}

#[cfg(any(test, feature = "csr"))]
fn delete_user_path(user_id: &str) -> String {
    format!("/api/admin/delet/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "csr")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use web_sys::RequestCredentials;

    use super::{ApiError, DeserializeOwned, bearer, status_error};
    use crate::config::client_config;
    use crate::net::types::MessageResponse;

    pub(super) fn get(path: &str, token: Option<&str>) -> RequestBuilder {
        prepare(Request::get(&client_config().endpoint(path)), token)
    }

    pub(super) fn post(path: &str, token: Option<&str>) -> RequestBuilder {
        prepare(Request::post(&client_config().endpoint(path)), token)
    }

    pub(super) fn delete(path: &str, token: Option<&str>) -> RequestBuilder {
        prepare(Request::delete(&client_config().endpoint(path)), token)
    }

    fn prepare(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        let builder = builder.credentials(RequestCredentials::Include);
        match token {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }

    pub(super) async fn send(request: Request) -> Result<Response, ApiError> {
        let url = request.url();
        let resp = request.send().await.map_err(|e| {
            log::warn!("request to {url} failed: {e}");
            ApiError::Request(e.to_string())
        })?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp.json::<MessageResponse>().await.ok().and_then(|body| body.message);
        log::warn!("request to {url} returned {status}");
        Err(status_error(status, message))
    }

    pub(super) async fn json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn text(resp: Response) -> Result<String, ApiError> {
        resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) fn with_json<T: serde::Serialize>(builder: RequestBuilder, body: &T) -> Result<Request, ApiError> {
        builder.json(body).map_err(|e| ApiError::Request(e.to_string()))
    }

    pub(super) fn empty(builder: RequestBuilder) -> Result<Request, ApiError> {
        builder.build().map_err(|e| ApiError::Request(e.to_string()))
    }
}

/// Fetch the full problem collection from `GET /api/problem`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is not a
/// problem list.
pub async fn fetch_problems() -> Result<Vec<Problem>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = http::send(http::empty(http::get("/api/problem", None))?).await?;
        let body = http::text(resp).await?;
        let items = problemset::parse_problem_list(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        log::debug!("loaded {} problems", items.len());
        Ok(items)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a problem via `POST /api/problem` and return the stored record.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn create_problem(payload: &NewProblem, token: Option<&str>) -> Result<Problem, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = http::send(http::with_json(http::post("/api/problem", token), payload)?).await?;
        http::json::<Problem>(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (payload, token);
        Err(ApiError::Unavailable)
    }
}

/// Log in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn login(payload: &LoginPayload) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = http::send(http::with_json(http::post("/api/auth/login", None), payload)?).await?;
        http::json::<LoginResponse>(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Register a new account via `POST /api/auth/register`.
///
/// Returns the server's confirmation message when present.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or status failure.
pub async fn register(payload: &RegisterPayload) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = http::send(http::with_json(http::post("/api/auth/register", None), payload)?).await?;
        let body = http::json::<super::types::MessageResponse>(resp).await.unwrap_or_default();
        Ok(body.message)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// End the server session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or status failure.
pub async fn logout(token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        http::send(http::empty(http::post("/api/auth/logout", token))?).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch all contests from `GET /api/get-contest`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_contests() -> Result<Vec<Contest>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = http::send(http::empty(http::get("/api/get-contest", None))?).await?;
        let body = http::json::<super::types::ContestList>(resp).await?;
        Ok(body.contest)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a contest via `POST /api/contest`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or status failure.
pub async fn create_contest(payload: &ContestPayload, token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        http::send(http::with_json(http::post("/api/contest", token), payload)?).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (payload, token);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every registered user from `GET /api/admin/getuser`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_admin_users(token: Option<&str>) -> Result<Vec<AdminUser>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = http::send(http::empty(http::get("/api/admin/getuser", token))?).await?;
        let body = http::json::<super::types::AdminUserList>(resp).await?;
        Ok(body.users)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Delete a user via `DELETE /api/admin/delet/{id}` and return the server message.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or status failure.
pub async fn delete_user(user_id: &str, token: Option<&str>) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = http::send(http::empty(http::delete(&delete_user_path(user_id), token))?).await?;
        let body = http::json::<super::types::MessageResponse>(resp).await.unwrap_or_default();
        Ok(body.message.unwrap_or_else(|| "User deleted".to_owned()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (user_id, token);
        Err(ApiError::Unavailable)
    }
}
