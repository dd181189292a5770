//! HTTP client composition for the TechHive backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two request clients back every data-access path: `PublicClient` for
//! anonymous reads and `SecureClient` for calls that must carry the bearer
//! token of the active session. The secure client maps 401/403 responses to
//! [`RequestError::Unauthorized`] so callers can tear the session down and
//! send the user back to `/login`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors since these endpoints are only meaningful in the
//! browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::RequestError;
use crate::util::persistence;

/// Production backend; overridable at compile time for staging builds.
const DEFAULT_BASE_URL: &str = "https://tech-hive-server-one.vercel.app";

/// Base URL of the REST backend.
pub fn base_url() -> &'static str {
    option_env!("TECHHIVE_API_BASE").unwrap_or(DEFAULT_BASE_URL)
}

/// Join a base URL and a path without doubling or dropping the separator.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Value of the `Authorization` header for `token`.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract a human-readable message from an error response body.
///
/// The backend reports failures as `{"message": "..."}`; plain-text bodies
/// are passed through, empty ones dropped.
pub fn extract_error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return Some(message.to_owned());
        }
        return None;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

#[cfg(feature = "hydrate")]
async fn read_failure(response: gloo_net::http::Response) -> RequestError {
    let status = response.status();
    let message = match response.text().await {
        Ok(body) => extract_error_message(&body),
        Err(_) => None,
    };
    leptos::logging::warn!("request failed: status={status}");
    RequestError::from_status(status, message)
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, RequestError> {
    if !response.ok() {
        return Err(read_failure(response).await);
    }
    response.json::<T>().await.map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_bare<T: DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
) -> Result<T, RequestError> {
    let response = builder.send().await.map_err(|e| RequestError::Network(e.to_string()))?;
    decode(response).await
}

#[cfg(feature = "hydrate")]
async fn send_json<T: DeserializeOwned, B: Serialize>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<T, RequestError> {
    let response = builder
        .json(body)
        .map_err(|e| RequestError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;
    decode(response).await
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> RequestError {
    RequestError::Network("not available on server".to_owned())
}

/// Unauthenticated request client.
#[derive(Clone, Debug)]
pub struct PublicClient {
    base: String,
}

impl Default for PublicClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicClient {
    pub fn new() -> Self {
        Self { base: base_url().to_owned() }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    /// `GET` a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self.url(path);
        #[cfg(feature = "hydrate")]
        {
            send_bare(gloo_net::http::Request::get(&url)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(server_stub())
        }
    }

    /// `POST` a JSON body and decode a JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let url = self.url(path);
        #[cfg(feature = "hydrate")]
        {
            send_json(gloo_net::http::Request::post(&url), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(server_stub())
        }
    }
}

/// Authenticated request client; attaches the persisted bearer token.
#[derive(Clone, Debug)]
pub struct SecureClient {
    base: String,
    token: Option<String>,
}

impl SecureClient {
    /// Build a secure client from the token in durable storage.
    pub fn from_storage() -> Self {
        Self { base: base_url().to_owned(), token: persistence::session_token() }
    }

    /// True when a bearer token is available to attach.
    pub fn has_credential(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    #[cfg(feature = "hydrate")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.token.as_deref() {
            Some(token) => builder.header("Authorization", &bearer_value(token)),
            None => builder,
        }
    }

    /// `GET` a JSON resource with credentials.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self.url(path);
        #[cfg(feature = "hydrate")]
        {
            send_bare(self.authorize(gloo_net::http::Request::get(&url))).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(server_stub())
        }
    }

    /// `POST` a JSON body with credentials.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let url = self.url(path);
        #[cfg(feature = "hydrate")]
        {
            send_json(self.authorize(gloo_net::http::Request::post(&url)), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(server_stub())
        }
    }

    /// `PATCH` a JSON body with credentials.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let url = self.url(path);
        #[cfg(feature = "hydrate")]
        {
            send_json(self.authorize(gloo_net::http::Request::patch(&url)), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(server_stub())
        }
    }

    /// `PUT` a JSON body with credentials.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let url = self.url(path);
        #[cfg(feature = "hydrate")]
        {
            send_json(self.authorize(gloo_net::http::Request::put(&url)), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(server_stub())
        }
    }

    /// `DELETE` a resource with credentials.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self.url(path);
        #[cfg(feature = "hydrate")]
        {
            send_bare(self.authorize(gloo_net::http::Request::delete(&url))).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(server_stub())
        }
    }
}
