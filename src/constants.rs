/// Default base URL of the cloud gateway's third-party API.
pub const DEFAULT_URL: &str = "https://api.sms-gate.app/3rdparty/v1";

/// `Content-Type` sent with every request.
pub const CONTENT_TYPE: &str = "application/json";

/// `User-Agent` identifying this client library.
pub const USER_AGENT: &str = concat!(
    "android-sms-gateway/",
    env!("CARGO_PKG_VERSION"),
    " (client; rust)"
);
