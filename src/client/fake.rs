use std::sync::{Arc, Mutex};

use crate::transport::{
    BlockingHttpTransport, BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport,
};

/// Records the last request and replays a canned response. Serves both the
/// async and the blocking client.
#[derive(Debug, Clone)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    last_request: Option<HttpRequest>,
    response: Option<HttpResponse>,
}

impl FakeTransport {
    pub fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self::with_response(Some(HttpResponse {
            status: response_status,
            body: response_body.into(),
        }))
    }

    /// A transport whose every call fails before reaching a server.
    pub fn failing() -> Self {
        Self::with_response(None)
    }

    fn with_response(response: Option<HttpResponse>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                last_request: None,
                response,
            })),
        }
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().last_request.clone()
    }

    fn respond(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut state = self.state.lock().unwrap();
        state.last_request = Some(request);
        state
            .response
            .clone()
            .ok_or_else(|| "connection refused".into())
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move { self.respond(request) })
    }
}

impl BlockingHttpTransport for FakeTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        self.respond(request)
    }
}
