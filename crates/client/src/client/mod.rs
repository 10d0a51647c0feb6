//! HTTP client for the homelink gateway API.

pub mod appliances;
pub mod operations;

use std::sync::Arc;

use url::Url;

use homelink_core::appliance::ErrorEnvelope;
use homelink_core::config::ConfigProvider;

use crate::error::{ApiError, Result};

/// Typed client for the appliance gateway.
///
/// Holds no mutable state: every call reads the [`ConfigProvider`] fresh and
/// issues exactly one HTTP request, so concurrent calls never interfere and
/// settings edits take effect on the next call. Cloning is cheap, the
/// underlying reqwest client shares its connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<dyn ConfigProvider>,
}

impl ApiClient {
    /// Create a client over the given settings source, with reqwest's
    /// default transport configuration (no explicit timeout).
    pub fn new(config: Arc<dyn ConfigProvider>) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client over a caller-built `reqwest::Client`, for transport
    /// control such as timeouts or proxies.
    pub fn with_http_client(config: Arc<dyn ConfigProvider>, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// Build a full URL for a gateway path.
    ///
    /// Fails with [`ApiError::NotConfigured`] when no base URL is set and
    /// with [`ApiError::WrongUrl`] when the configured value does not
    /// parse. Both are caught before any network activity.
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let host = self
            .config
            .base_url()
            .filter(|host| !host.is_empty())
            .ok_or(ApiError::NotConfigured)?;
        let raw = format!("{}{}", host.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|_| ApiError::WrongUrl)
    }

    /// Execute a prepared request and return the status with the raw body.
    ///
    /// Transport failures are classified before anything else; a response
    /// whose body cannot be read maps to [`ApiError::NoResponse`].
    async fn dispatch(&self, request: reqwest::Request) -> Result<(u16, String)> {
        tracing::debug!(method = %request.method(), url = %request.url(), "dispatching request");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(ApiError::from_transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|error| {
            if error.is_timeout() {
                ApiError::TimedOut
            } else {
                ApiError::NoResponse
            }
        })?;
        Ok((status, body))
    }

    /// Require a 200 status, converting anything else into
    /// [`ApiError::Server`] with the envelope message when one decodes.
    fn check_status(status: u16, body: &str) -> Result<()> {
        if status == 200 {
            return Ok(());
        }
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_default();
        Err(ApiError::Server { status, message })
    }

    /// Send a request and decode a JSON success body.
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::Request,
    ) -> Result<T> {
        let (status, body) = self.dispatch(request).await?;
        Self::check_status(status, &body)?;
        serde_json::from_str(&body).map_err(|error| {
            tracing::warn!(%error, "response body failed to decode");
            ApiError::Decode(error)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homelink_core::config::StaticConfig;

    fn client_with_host(host: &str) -> ApiClient {
        ApiClient::new(Arc::new(StaticConfig::new(host, "secret")))
    }

    #[test]
    fn test_endpoint_url_joins_host_and_path() {
        let client = client_with_host("http://gateway.local");
        let url = client.endpoint_url("/api/v1/list").unwrap();
        assert_eq!(url.as_str(), "http://gateway.local/api/v1/list");
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let client = client_with_host("http://gateway.local/");
        let url = client.endpoint_url("/api/v1/list").unwrap();
        assert_eq!(url.as_str(), "http://gateway.local/api/v1/list");
    }

    #[test]
    fn test_missing_base_url_is_not_configured() {
        let client = ApiClient::new(Arc::new(StaticConfig::unconfigured()));
        let err = client.endpoint_url("/api/v1/list").unwrap_err();
        assert!(matches!(err, ApiError::NotConfigured));
    }

    #[test]
    fn test_empty_base_url_is_not_configured() {
        let client = client_with_host("");
        let err = client.endpoint_url("/api/v1/list").unwrap_err();
        assert!(matches!(err, ApiError::NotConfigured));
    }

    #[test]
    fn test_unparseable_base_url_is_wrong_url() {
        let client = client_with_host("not a url");
        let err = client.endpoint_url("/api/v1/list").unwrap_err();
        assert!(matches!(err, ApiError::WrongUrl));
    }

    #[test]
    fn test_check_status_accepts_only_200() {
        assert!(ApiClient::check_status(200, "[]").is_ok());
        for status in [201u16, 204, 301, 400, 401, 404, 500] {
            assert!(matches!(
                ApiClient::check_status(status, ""),
                Err(ApiError::Server { status: s, .. }) if s == status
            ));
        }
    }

    #[test]
    fn test_check_status_extracts_envelope_message() {
        let body = r#"{"error":{"message":"unknown appliance 'toaster'"}}"#;
        let err = ApiClient::check_status(404, body).unwrap_err();
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "unknown appliance 'toaster'");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn test_check_status_tolerates_non_envelope_body() {
        let err = ApiClient::check_status(500, "Internal Server Error").unwrap_err();
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }
}
