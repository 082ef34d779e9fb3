//! REST API client for the fundraising backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! Every request flows through [`api_call`]: it joins the fixed base URL
//! with a relative endpoint, injects the persisted session token as an
//! `Authorization: Token` header, serializes JSON bodies, races the round
//! trip against a fixed timeout, and normalizes every failure into
//! [`ApiError`]. Each call is a stateless request/response cycle with no
//! retry and no deduplication.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::net::types::{
    Credentials, Fundraiser, FundraiserUpdate, NewFundraiser, NewPledge, NewUser, Pledge,
    TokenResponse,
};

/// Base URL of the fundraising REST API.
pub const API_URL: &str = "http://localhost:8000/api";

/// Per-call deadline before a request is abandoned as a transport failure.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Join the fixed base URL with a relative endpoint.
///
/// Plain concatenation; endpoints are trusted string literals.
pub fn join_url(base: &str, endpoint: &str) -> String {
    format!("{base}{endpoint}")
}

/// Build the outgoing header set.
///
/// `Content-Type: application/json` is always present and a present token
/// adds `Authorization: Token <value>`. Caller-supplied extras are merged
/// last and may override a default by name, but never remove it.
pub fn build_headers(token: Option<&str>, extra: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
    if let Some(token) = token {
        headers.push(("Authorization".to_owned(), format!("Token {token}")));
    }
    for (name, value) in extra {
        if let Some(existing) = headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            existing.1.clone_from(value);
        } else {
            headers.push((name.clone(), value.clone()));
        }
    }
    headers
}

/// Interpret a non-success response body.
///
/// Tries to parse the body as JSON and pull a human-readable `detail` (or
/// `message`) field; anything else falls back to a generic message carrying
/// the status code.
pub fn normalize_error_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(serde_json::Value::as_str)
                .or_else(|| value.get("message").and_then(serde_json::Value::as_str))
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    ApiError::status(status, message)
}

/// Parse a success response body.
///
/// 204 yields `None` without touching the body; any other success status
/// must deserialize into `T`.
pub fn parse_success_body<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Option<T>, ApiError> {
    if status == 204 {
        return Ok(None);
    }
    serde_json::from_str::<T>(body)
        .map(Some)
        .map_err(|e| ApiError::transport(format!("Unexpected response shape: {e}")))
}

/// Issue a request against the fundraising API.
///
/// Returns `Ok(None)` for 204 responses, `Ok(Some(_))` for parsed bodies.
///
/// # Errors
///
/// Any transport failure, timeout, non-success status, or body-shape
/// mismatch is returned as an [`ApiError`] after being logged.
pub async fn api_call<T: DeserializeOwned>(
    method: Method,
    endpoint: &str,
    body: Option<serde_json::Value>,
    extra_headers: &[(String, String)],
) -> Result<Option<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let url = join_url(API_URL, endpoint);
        let token = crate::state::token_store::token();

        let mut builder = gloo_net::http::RequestBuilder::new(&url).method(match method {
            Method::Get => gloo_net::http::Method::GET,
            Method::Post => gloo_net::http::Method::POST,
            Method::Put => gloo_net::http::Method::PUT,
            Method::Delete => gloo_net::http::Method::DELETE,
        });
        for (name, value) in build_headers(token.as_deref(), extra_headers) {
            builder = builder.header(&name, &value);
        }
        let request = match body {
            Some(value) => builder.body(value.to_string()),
            None => builder.build(),
        }
        .map_err(|e| ApiError::transport(e.to_string()))?;

        let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        let response = match select(Box::pin(request.send()), Box::pin(timeout)).await {
            Either::Left((result, _)) => result.map_err(|e| {
                leptos::logging::warn!("API call failed: {} {endpoint}: {e}", method.as_str());
                ApiError::transport(e.to_string())
            })?,
            Either::Right(((), _)) => {
                leptos::logging::warn!("API call timed out: {} {endpoint}", method.as_str());
                return Err(ApiError::transport("Request timed out"));
            }
        };

        let status = response.status();
        if !response.ok() {
            let body_text = response.text().await.unwrap_or_default();
            let err = normalize_error_body(status, &body_text);
            leptos::logging::warn!("API call failed: {} {endpoint}: {err}", method.as_str());
            return Err(err);
        }
        if status == 204 {
            return Ok(None);
        }
        let body_text = response
            .text()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        parse_success_body(status, &body_text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, endpoint, body, extra_headers);
        Err(ApiError::transport("not available on server"))
    }
}

/// Encode a request body as JSON.
fn to_body<B: serde::Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::transport(format!("Failed to encode request body: {e}")))
}

/// A call whose response must carry a body.
fn require<T>(value: Option<T>) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::transport("Empty response body"))
}

/// Exchange credentials for an API token via `POST /api-token-auth/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are
/// rejected.
pub async fn login(credentials: &Credentials) -> Result<TokenResponse, ApiError> {
    let body = to_body(credentials)?;
    require(api_call(Method::Post, "/api-token-auth/", Some(body), &[]).await?)
}

/// Create a new user account via `POST /users/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the account is rejected.
pub async fn register(new_user: &NewUser) -> Result<(), ApiError> {
    let body = to_body(new_user)?;
    api_call::<serde_json::Value>(Method::Post, "/users/", Some(body), &[]).await?;
    Ok(())
}

/// Fetch all fundraisers via `GET /fundraisers/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_fundraisers() -> Result<Vec<Fundraiser>, ApiError> {
    require(api_call(Method::Get, "/fundraisers/", None, &[]).await?)
}

/// Fetch one fundraiser with its pledges via `GET /fundraisers/{id}/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the id is unknown.
pub async fn fetch_fundraiser(id: i64) -> Result<Fundraiser, ApiError> {
    require(api_call(Method::Get, &format!("/fundraisers/{id}/"), None, &[]).await?)
}

/// Create a fundraiser via `POST /fundraisers/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn create_fundraiser(new_fundraiser: &NewFundraiser) -> Result<Fundraiser, ApiError> {
    let body = to_body(new_fundraiser)?;
    require(api_call(Method::Post, "/fundraisers/", Some(body), &[]).await?)
}

/// Update a fundraiser via `PUT /fundraisers/{id}/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn update_fundraiser(
    id: i64,
    update: &FundraiserUpdate,
) -> Result<Fundraiser, ApiError> {
    let body = to_body(update)?;
    require(api_call(Method::Put, &format!("/fundraisers/{id}/"), Some(body), &[]).await?)
}

/// Delete a fundraiser via `DELETE /fundraisers/{id}/`.
///
/// The backend answers 204; no body is expected.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn delete_fundraiser(id: i64) -> Result<(), ApiError> {
    api_call::<serde_json::Value>(Method::Delete, &format!("/fundraisers/{id}/"), None, &[])
        .await?;
    Ok(())
}

/// Create a pledge via `POST /pledges/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or is rejected.
pub async fn create_pledge(new_pledge: &NewPledge) -> Result<Pledge, ApiError> {
    let body = to_body(new_pledge)?;
    require(api_call(Method::Post, "/pledges/", Some(body), &[]).await?)
}

/// Fetch the signed-in user's fundraisers via `GET /fundraisers/?owner=me`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_my_fundraisers() -> Result<Vec<Fundraiser>, ApiError> {
    require(api_call(Method::Get, "/fundraisers/?owner=me", None, &[]).await?)
}

/// Fetch the signed-in user's pledges via `GET /pledges/?supporter=me`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_my_pledges() -> Result<Vec<Pledge>, ApiError> {
    require(api_call(Method::Get, "/pledges/?supporter=me", None, &[]).await?)
}

/// Fetch both profile lists, concurrently in the browser.
///
/// Completion order of the two calls is whatever the transport delivers;
/// the pair is joined before either result is surfaced.
///
/// # Errors
///
/// Returns the first [`ApiError`] if either request fails.
pub async fn fetch_profile_data() -> Result<(Vec<Fundraiser>, Vec<Pledge>), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (fundraisers, pledges) =
            futures::future::join(fetch_my_fundraisers(), fetch_my_pledges()).await;
        Ok((fundraisers?, pledges?))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok((fetch_my_fundraisers().await?, fetch_my_pledges().await?))
    }
}
