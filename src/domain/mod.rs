//! Domain layer: credentials, header construction and validation (no I/O).

mod credentials;
mod headers;
mod validation;
mod value;

pub use credentials::{AuthScheme, Credentials};
pub use headers::{
    AUTHORIZATION, AuthHeaderBuilder, CONTENT_TYPE_HEADER, HeaderSet, USER_AGENT_HEADER,
};
pub use validation::ValidationError;
pub use value::{Login, Password, Token};
