use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Neither a login/password pair nor a token was usable.
    MissingCredentials,
    Empty { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials => {
                f.write_str("Either login and password or token must be provided")
            }
            Self::Empty { field } => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::MissingCredentials;
        assert_eq!(
            err.to_string(),
            "Either login and password or token must be provided"
        );

        let err = ValidationError::Empty { field: "token" };
        assert_eq!(err.to_string(), "token must not be empty");
    }
}
