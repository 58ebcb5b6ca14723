use serde::Serialize;
use serde::de::DeserializeOwned;

pub fn encode_json_body<B: Serialize + ?Sized>(body: &B) -> Result<String, serde_json::Error> {
    serde_json::to_string(body)
}

/// Decode a success body. A blank body decodes as JSON `null`, so `()` and
/// `Option<_>` targets accept `204 No Content` style responses.
pub fn decode_json_body<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    if body.trim().is_empty() {
        return serde_json::from_str("null");
    }
    serde_json::from_str(body)
}
