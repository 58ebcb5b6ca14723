//! Client layer: validates credentials up front, then attaches the resulting
//! headers to every request handed to the transport.

mod blocking;
#[cfg(test)]
mod fake;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::DEFAULT_URL;
use crate::domain::{Credentials, HeaderSet, ValidationError};
use crate::transport::{
    BoxError, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
    decode_json_body, encode_json_body,
};

pub use blocking::{ApiClient, ApiClientBuilder};

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ApiClient`] and [`AsyncApiClient`].
pub enum GatewayError {
    /// Credentials were rejected before any request was made.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be decoded as the expected JSON.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Request body could not be encoded as JSON.
    #[error("serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Clone)]
/// Builder for [`AsyncApiClient`].
///
/// Use this when you need a custom base URL, timeout, or transport.
pub struct AsyncApiClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl AsyncApiClientBuilder {
    /// Create a builder with the default base URL and transport.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_URL.to_owned(),
            timeout: None,
            transport: None,
        }
    }

    /// Override the API base URL. It is used as given, minus trailing slashes.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a timeout for the default transport. Ignored when a transport is injected.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a caller-provided transport instead of the default `reqwest` one.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build an [`AsyncApiClient`].
    pub fn build(self) -> Result<AsyncApiClient, GatewayError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                let client = builder
                    .build()
                    .map_err(|err| GatewayError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(AsyncApiClient::from_parts(
            &self.credentials,
            self.base_url,
            http,
        ))
    }
}

#[derive(Clone)]
/// Async gateway client.
///
/// Headers are computed once at construction and sent with every request.
/// Construction itself is synchronous: invalid credentials fail before any
/// future is created.
pub struct AsyncApiClient {
    headers: Arc<HeaderSet>,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl AsyncApiClient {
    /// Create a client from a positional `login` / `password_or_token` pair.
    ///
    /// With a non-empty `login` this uses Basic auth, otherwise `password_or_token`
    /// is sent as a Bearer token. An empty `password_or_token` is rejected with
    /// [`ValidationError::MissingCredentials`].
    pub fn new(login: Option<&str>, password_or_token: &str) -> Result<Self, GatewayError> {
        let credentials = Credentials::from_parts(login, Some(password_or_token))?;
        Ok(Self::from_parts(
            &credentials,
            DEFAULT_URL.to_owned(),
            Arc::new(ReqwestTransport::new(reqwest::Client::new())),
        ))
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> AsyncApiClientBuilder {
        AsyncApiClientBuilder::new(credentials)
    }

    fn from_parts(
        credentials: &Credentials,
        base_url: String,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        let base_url = normalize_base_url(base_url);
        tracing::debug!(
            scheme = credentials.scheme().as_str(),
            base_url = %base_url,
            "async gateway client constructed"
        );
        Self {
            headers: Arc::new(HeaderSet::from_credentials(credentials)),
            base_url,
            http,
        }
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request with an optional JSON body and decode the JSON response.
    ///
    /// Errors:
    /// - [`GatewayError::Serialize`] when `body` cannot be encoded,
    /// - [`GatewayError::Transport`] when the transport fails,
    /// - [`GatewayError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`GatewayError::Parse`] when the response is not the expected JSON.
    pub async fn request_json<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = prepare_request(&self.base_url, &self.headers, method, path, body)?;
        let response = self
            .http
            .send(request)
            .await
            .map_err(GatewayError::Transport)?;
        decode_response(method, path, response)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.request_json::<(), T>(HttpMethod::Get, path, None)
            .await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_json(HttpMethod::Post, path, Some(body)).await
    }

    /// Send a `DELETE`, ignoring any response body.
    pub async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        self.request_json::<(), serde_json::Value>(HttpMethod::Delete, path, None)
            .await
            .map(|_| ())
    }
}

fn normalize_base_url(base_url: String) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.len() == base_url.len() {
        base_url
    } else {
        trimmed.to_owned()
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    if path.is_empty() || path.starts_with('/') {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}/{path}")
    }
}

fn prepare_request<B: Serialize + ?Sized>(
    base_url: &str,
    headers: &HeaderSet,
    method: HttpMethod,
    path: &str,
    body: Option<&B>,
) -> Result<HttpRequest, GatewayError> {
    let body = body
        .map(encode_json_body)
        .transpose()
        .map_err(GatewayError::Serialize)?;
    let url = join_url(base_url, path);
    tracing::debug!(method = method.as_str(), url = %url, "sending gateway request");

    Ok(HttpRequest {
        method,
        url,
        headers: headers.to_pairs(),
        body,
    })
}

fn decode_response<T: DeserializeOwned>(
    method: HttpMethod,
    path: &str,
    response: HttpResponse,
) -> Result<T, GatewayError> {
    if !response.is_success() {
        tracing::warn!(
            method = method.as_str(),
            path,
            status = response.status,
            "gateway returned non-success status"
        );
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(GatewayError::HttpStatus {
            status: response.status,
            body,
        });
    }

    decode_json_body(&response.body).map_err(GatewayError::Parse)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::fake::FakeTransport;
    use super::*;
    use crate::domain::AUTHORIZATION;

    const MISSING: &str = "Either login and password or token must be provided";

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        id: String,
    }

    fn make_client(credentials: Credentials, transport: FakeTransport) -> AsyncApiClient {
        AsyncApiClient::builder(credentials)
            .base_url("https://example.invalid/api/")
            .transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn basic_auth_initialization() {
        let client = AsyncApiClient::new(Some("test_login"), "test_password").unwrap();
        let headers = client.headers();
        assert!(headers.get(AUTHORIZATION).unwrap().starts_with("Basic "));
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
        assert!(headers.contains_key("User-Agent"));
        assert_eq!(client.base_url(), DEFAULT_URL);
    }

    #[tokio::test]
    async fn jwt_auth_initialization() {
        let client = AsyncApiClient::new(None, "test_jwt_token").unwrap();
        let headers = client.headers();
        assert_eq!(headers.get(AUTHORIZATION), Some("Bearer test_jwt_token"));
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
        assert!(headers.contains_key("User-Agent"));
    }

    #[test]
    fn missing_credentials_fail_without_a_runtime() {
        // No executor here: validation must not depend on polling a future.
        let err = AsyncApiClient::new(None, "").err().unwrap();
        assert!(matches!(
            err,
            GatewayError::Validation(ValidationError::MissingCredentials)
        ));
        assert!(err.to_string().contains(MISSING));

        let err = AsyncApiClient::new(Some("test_login"), "").err().unwrap();
        assert!(err.to_string().contains(MISSING));
    }

    #[test]
    fn builder_strips_trailing_slash() {
        let client = make_client(
            Credentials::bearer("t").unwrap(),
            FakeTransport::new(200, ""),
        );
        assert_eq!(client.base_url(), "https://example.invalid/api");
    }

    #[tokio::test]
    async fn get_json_attaches_headers_and_decodes() {
        let transport = FakeTransport::new(200, r#"{"id": "abc"}"#);
        let client = make_client(Credentials::bearer("jwt").unwrap(), transport.clone());

        let echo: Echo = client.get_json("/thing").await.unwrap();
        assert_eq!(echo, Echo { id: "abc".into() });

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://example.invalid/api/thing");
        assert_eq!(request.headers, client.headers().to_pairs());
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn post_json_encodes_body() {
        let transport = FakeTransport::new(201, r#"{"id": "new"}"#);
        let client = make_client(
            Credentials::basic("user", "pass").unwrap(),
            transport.clone(),
        );

        let body = serde_json::json!({ "text": "hi" });
        let echo: Echo = client.post_json("thing", &body).await.unwrap();
        assert_eq!(echo.id, "new");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://example.invalid/api/thing");
        assert_eq!(request.body.as_deref(), Some(r#"{"text":"hi"}"#));
        assert!(
            request
                .headers
                .iter()
                .any(|(k, v)| k == "Authorization" && v.starts_with("Basic "))
        );
    }

    #[tokio::test]
    async fn delete_accepts_empty_body() {
        let transport = FakeTransport::new(204, "");
        let client = make_client(Credentials::bearer("jwt").unwrap(), transport.clone());
        client.delete("/thing/1").await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().method,
            HttpMethod::Delete
        );
    }

    #[tokio::test]
    async fn maps_non_success_http_status() {
        let client = make_client(
            Credentials::bearer("jwt").unwrap(),
            FakeTransport::new(401, "unauthorized"),
        );
        let err = client.get_json::<Echo>("/thing").await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::HttpStatus {
                status: 401,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn maps_empty_http_body_to_none() {
        let client = make_client(
            Credentials::bearer("jwt").unwrap(),
            FakeTransport::new(503, "   "),
        );
        let err = client.get_json::<Echo>("/thing").await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn maps_invalid_json_to_parse_error() {
        let client = make_client(
            Credentials::bearer("jwt").unwrap(),
            FakeTransport::new(200, "{ not json }"),
        );
        let err = client.get_json::<Echo>("/thing").await.unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[tokio::test]
    async fn maps_transport_failure() {
        let client = make_client(Credentials::bearer("jwt").unwrap(), FakeTransport::failing());
        let err = client.get_json::<Echo>("/thing").await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[test]
    fn join_url_inserts_single_slash() {
        assert_eq!(join_url("https://h/v1", "/a"), "https://h/v1/a");
        assert_eq!(join_url("https://h/v1", "a"), "https://h/v1/a");
        assert_eq!(join_url("https://h/v1", ""), "https://h/v1");
    }
}
