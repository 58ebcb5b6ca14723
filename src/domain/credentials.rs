use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use crate::domain::validation::ValidationError;
use crate::domain::value::{Login, Password, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthScheme {
    Basic,
    Bearer,
}

impl AuthScheme {
    /// Scheme prefix used in the `Authorization` header.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Bearer => "Bearer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Authentication credentials for gateway API calls.
///
/// Use [`Credentials::basic`] for a login/password pair, [`Credentials::bearer`]
/// for a pre-issued token, or [`Credentials::from_parts`] when the scheme is
/// decided by which values are present.
pub enum Credentials {
    /// HTTP Basic auth with `login:password`.
    Basic { login: Login, password: Password },
    /// HTTP Bearer auth with a JWT.
    Bearer { token: Token },
}

impl Credentials {
    /// Create [`Credentials::Basic`] and validate that both parts are non-empty.
    pub fn basic(
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::Basic {
            login: Login::new(login)?,
            password: Password::new(password)?,
        })
    }

    /// Create [`Credentials::Bearer`] and validate that the token is non-empty.
    pub fn bearer(token: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::Bearer {
            token: Token::new(token)?,
        })
    }

    /// Pick the scheme from the positional `login` / `password_or_token` pair.
    ///
    /// - non-empty `login` and `password_or_token`: Basic;
    /// - missing or empty `login`, non-empty `password_or_token`: Bearer;
    /// - missing or empty `password_or_token`: [`ValidationError::MissingCredentials`],
    ///   whether or not `login` is set.
    pub fn from_parts(
        login: Option<&str>,
        password_or_token: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let secret = match password_or_token {
            Some(value) if !value.is_empty() => value,
            _ => return Err(ValidationError::MissingCredentials),
        };

        match login {
            Some(login) if !login.is_empty() => Self::basic(login, secret),
            _ => Self::bearer(secret),
        }
    }

    pub fn scheme(&self) -> AuthScheme {
        match self {
            Self::Basic { .. } => AuthScheme::Basic,
            Self::Bearer { .. } => AuthScheme::Bearer,
        }
    }

    /// Value of the `Authorization` header for these credentials.
    pub fn authorization(&self) -> String {
        match self {
            Self::Basic { login, password } => {
                let pair = format!("{}:{}", login.as_str(), password.as_str());
                format!("Basic {}", BASE64_STANDARD.encode(pair))
            }
            Self::Bearer { token } => format!("Bearer {}", token.as_str()),
        }
    }
}
