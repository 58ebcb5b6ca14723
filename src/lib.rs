//! Typed Rust client for the Android SMS Gateway HTTP API.
//!
//! The crate is split into a domain layer (credentials and header
//! construction), a transport layer (the HTTP seam and JSON helpers) and a
//! client layer with a blocking [`ApiClient`] and an async [`AsyncApiClient`].
//! Both clients validate credentials and compute their headers once, at
//! construction time.
//!
//! ```rust,no_run
//! use android_sms_gateway::{AsyncApiClient, GatewayError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), GatewayError> {
//!     // Basic auth: login + password.
//!     let basic = AsyncApiClient::new(Some("login"), "password")?;
//!     // Bearer auth: no login, the second argument is a JWT.
//!     let bearer = AsyncApiClient::new(None, "eyJhbGciOi...")?;
//!     assert!(basic.headers().get("Authorization").is_some());
//!     assert!(bearer.headers().get("Authorization").is_some());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod constants;
pub mod domain;
pub mod transport;

pub use client::{
    ApiClient, ApiClientBuilder, AsyncApiClient, AsyncApiClientBuilder, GatewayError,
};
pub use constants::DEFAULT_URL;
pub use domain::{
    AuthHeaderBuilder, AuthScheme, Credentials, HeaderSet, Login, Password, Token,
    ValidationError,
};
pub use transport::{
    BlockingHttpTransport, BlockingReqwestTransport, HttpMethod, HttpRequest, HttpResponse,
    HttpTransport, ReqwestTransport,
};
