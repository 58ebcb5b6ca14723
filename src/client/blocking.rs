use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::{GatewayError, decode_response, normalize_base_url, prepare_request};
use crate::constants::DEFAULT_URL;
use crate::domain::{Credentials, HeaderSet};
use crate::transport::{BlockingHttpTransport, BlockingReqwestTransport, HttpMethod};

#[derive(Clone)]
/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn BlockingHttpTransport>>,
}

impl ApiClientBuilder {
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
    pub fn transport(mut self, transport: Arc<dyn BlockingHttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build an [`ApiClient`].
    pub fn build(self) -> Result<ApiClient, GatewayError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::blocking::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                let client = builder
                    .build()
                    .map_err(|err| GatewayError::Transport(Box::new(err)))?;
                Arc::new(BlockingReqwestTransport::new(client))
            }
        };

        Ok(ApiClient::from_parts(&self.credentials, self.base_url, http))
    }
}

#[derive(Clone)]
/// Blocking gateway client.
///
/// Behaves exactly like [`AsyncApiClient`](crate::AsyncApiClient) but drives a
/// [`BlockingHttpTransport`]. The default transport must not be used from
/// inside an async runtime.
pub struct ApiClient {
    headers: Arc<HeaderSet>,
    base_url: String,
    http: Arc<dyn BlockingHttpTransport>,
}

impl ApiClient {
    /// Create a client from a positional `login` / `password_or_token` pair.
    ///
    /// See [`AsyncApiClient::new`](crate::AsyncApiClient::new) for the rules.
    pub fn new(login: Option<&str>, password_or_token: &str) -> Result<Self, GatewayError> {
        let credentials = Credentials::from_parts(login, Some(password_or_token))?;
        Ok(Self::from_parts(
            &credentials,
            DEFAULT_URL.to_owned(),
            Arc::new(BlockingReqwestTransport::new(
                reqwest::blocking::Client::new(),
            )),
        ))
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> ApiClientBuilder {
        ApiClientBuilder::new(credentials)
    }

    fn from_parts(
        credentials: &Credentials,
        base_url: String,
        http: Arc<dyn BlockingHttpTransport>,
    ) -> Self {
        let base_url = normalize_base_url(base_url);
        tracing::debug!(
            scheme = credentials.scheme().as_str(),
            base_url = %base_url,
            "gateway client constructed"
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
    /// Errors match [`AsyncApiClient::request_json`](crate::AsyncApiClient::request_json).
    pub fn request_json<B, T>(
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
        let response = self.http.send(request).map_err(GatewayError::Transport)?;
        decode_response(method, path, response)
    }

    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.request_json::<(), T>(HttpMethod::Get, path, None)
    }

    pub fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_json(HttpMethod::Post, path, Some(body))
    }

    /// Send a `DELETE`, ignoring any response body.
    pub fn delete(&self, path: &str) -> Result<(), GatewayError> {
        self.request_json::<(), serde_json::Value>(HttpMethod::Delete, path, None)
            .map(|_| ())
    }
}
