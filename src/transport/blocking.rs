use crate::transport::{BoxError, HttpRequest, HttpResponse};

/// Blocking HTTP transport used by [`ApiClient`](crate::ApiClient).
pub trait BlockingHttpTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

#[derive(Debug, Clone)]
/// [`BlockingHttpTransport`] backed by [`reqwest::blocking::Client`].
///
/// Like the underlying client, this must not be created or dropped inside an
/// async runtime.
pub struct BlockingReqwestTransport {
    client: reqwest::blocking::Client,
}

impl BlockingReqwestTransport {
    pub fn new(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl BlockingHttpTransport for BlockingReqwestTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = self
            .client
            .request(request.method.to_reqwest(), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}
