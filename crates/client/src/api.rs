//! HTTP client for the backend REST API.
//!
//! Every backend reply is wrapped in a JSON envelope
//! `{status, data, message}`; `status == 200` inside the envelope is the
//! sole success discriminator, independent of the transport-level HTTP
//! status. The client parses the body as JSON unconditionally, attaches a
//! bearer token when one is present in the session store (re-read on every
//! call), and normalizes failures into [`ApiError`].

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, instrument};

use crate::config::ClientConfig;
use crate::session::SessionStore;

/// Envelope status value that signals success.
pub const ENVELOPE_SUCCESS: i32 = 200;

/// Errors that can occur when calling the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Transport-level non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Envelope-level business failure (`status != 200`).
    #[error("{message}")]
    Rejected { status: i32, message: String },
}

/// Uniform response envelope returned by every backend endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Application-level status; 200 means success.
    pub status: i32,
    /// Payload, present on success.
    pub data: Option<T>,
    /// Human-readable message, usually present on failure.
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Whether the envelope signals success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == ENVELOPE_SUCCESS
    }

    /// Unwrap the payload, converting an envelope-level failure into
    /// [`ApiError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` when the envelope status is not 200 or
    /// a successful envelope carries no data.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.is_success() {
            self.data.ok_or(ApiError::Rejected {
                status: ENVELOPE_SUCCESS,
                message: "response envelope has no data".to_string(),
            })
        } else {
            Err(ApiError::Rejected {
                status: self.status,
                message: self
                    .message
                    .unwrap_or_else(|| "request rejected by server".to_string()),
            })
        }
    }
}

/// HTTP client for the backend REST API.
///
/// Cheaply cloneable via `Arc`. The bearer token is read from the session
/// store on every call, so a token rotation takes effect on the very next
/// request.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                session,
            }),
        }
    }

    /// The session store this client reads tokens from.
    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.inner.session
    }

    /// Issue a GET request. An empty `query` slice adds no query string.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status, or
    /// a body that fails to parse as an envelope.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, ApiError> {
        self.dispatch::<T, ()>(Method::GET, path, query, None).await
    }

    /// Issue a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        self.dispatch(Method::POST, path, &[], Some(body)).await
    }

    /// Issue a PUT request. The body is optional so "update via query
    /// params only" endpoints can send none at all.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, ApiError> {
        self.dispatch(Method::PUT, path, query, body).await
    }

    /// Issue a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.dispatch::<T, ()>(Method::DELETE, path, &[], None)
            .await
    }

    /// Build, send, and unwrap one request.
    #[instrument(skip(self, body, query), fields(method = %method, path = %path))]
    async fn dispatch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Envelope<T>, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);

        let mut request = self
            .inner
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        // Token is re-read from durable storage on every call.
        if let Some(token) = self.inner.session.token() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token.expose_secret()));
        }

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "request failed");
            e
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Prefer the server-supplied envelope message when the error
            // body carries one.
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&text)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("HTTP error (status {})", status.as_u16()));
            error!(status = status.as_u16(), %message, "non-success response");
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, "failed to parse response envelope");
            ApiError::Parse(e)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success_into_result() {
        let envelope: Envelope<i32> =
            serde_json::from_str(r#"{"status":200,"data":7,"message":null}"#).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.into_result().unwrap(), 7);
    }

    #[test]
    fn test_envelope_failure_preserves_server_message() {
        let envelope: Envelope<i32> =
            serde_json::from_str(r#"{"status":404,"message":"item not found"}"#).unwrap();
        assert!(!envelope.is_success());
        match envelope.into_result().unwrap_err() {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "item not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_envelope_failure_without_message_gets_fallback() {
        let envelope: Envelope<i32> = serde_json::from_str(r#"{"status":500}"#).unwrap();
        match envelope.into_result().unwrap_err() {
            ApiError::Rejected { message, .. } => {
                assert_eq!(message, "request rejected by server");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_envelope_success_without_data_is_error() {
        let envelope: Envelope<i32> = serde_json::from_str(r#"{"status":200}"#).unwrap();
        assert!(envelope.into_result().is_err());
    }

    #[test]
    fn test_envelope_ignores_extra_fields() {
        // The backend also sends a timestamp; it must not break parsing.
        let envelope: Envelope<Vec<i32>> = serde_json::from_str(
            r#"{"status":200,"data":[1,2],"message":null,"timestamp":"2024-05-01T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(envelope.into_result().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Http {
            status: 502,
            message: "HTTP error (status 502)".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error (status 502)");

        let err = ApiError::Rejected {
            status: 400,
            message: "quantity must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }
}
