use crate::constants::{CONTENT_TYPE, USER_AGENT};
use crate::domain::credentials::Credentials;
use crate::domain::validation::ValidationError;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const USER_AGENT_HEADER: &str = "User-Agent";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Insertion-ordered header map attached to every request a client sends.
///
/// Lookups compare names ASCII case-insensitively. A `HeaderSet` is built once
/// from [`Credentials`] and never changes afterwards.
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    /// Build the fixed header set for `credentials`.
    ///
    /// Always contains `Authorization`, `Content-Type` and `User-Agent`, in that order.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        tracing::debug!(
            scheme = credentials.scheme().as_str(),
            "building request headers"
        );
        Self {
            entries: vec![
                (AUTHORIZATION.to_owned(), credentials.authorization()),
                (CONTENT_TYPE_HEADER.to_owned(), CONTENT_TYPE.to_owned()),
                (USER_AGENT_HEADER.to_owned(), USER_AGENT.to_owned()),
            ],
        }
    }

    /// Look up a header value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of the entries, in insertion order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries.clone()
    }
}

/// Validates positional credentials and produces the client's [`HeaderSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthHeaderBuilder;

impl AuthHeaderBuilder {
    /// Build headers from a `login` / `password_or_token` pair.
    ///
    /// See [`Credentials::from_parts`] for how the scheme is chosen.
    pub fn build(
        login: Option<&str>,
        password_or_token: Option<&str>,
    ) -> Result<HeaderSet, ValidationError> {
        let credentials = Credentials::from_parts(login, password_or_token)?;
        Ok(HeaderSet::from_credentials(&credentials))
    }
}
