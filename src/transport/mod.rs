//! Transport layer: the HTTP seam the clients delegate to, plus wire-format helpers.
//!
//! Clients never talk to `reqwest` directly. They build an [`HttpRequest`] with
//! their [`HeaderSet`](crate::HeaderSet) attached and hand it to an injected
//! [`HttpTransport`] (async) or [`BlockingHttpTransport`] (blocking).

mod blocking;
mod http;
mod json;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

pub use blocking::{BlockingHttpTransport, BlockingReqwestTransport};
pub use http::{HttpTransport, ReqwestTransport};
pub(crate) use json::{decode_json_body, encode_json_body};

pub type BoxError = Box<dyn StdError + Send + Sync>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A fully prepared outgoing request.
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Headers in the order they should be sent.
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}
