use thiserror::Error;

/// Reasons an `Authorization` header could not yield an API key.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,

    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

impl AuthError {
    /// Stable machine-readable code used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoAuthHeaderIncluded => "no_auth_header",
            Self::MalformedAuthHeader => "malformed_auth_header",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AuthError::NoAuthHeaderIncluded.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            AuthError::MalformedAuthHeader.to_string(),
            "malformed authorization header"
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        assert_ne!(
            AuthError::NoAuthHeaderIncluded.code(),
            AuthError::MalformedAuthHeader.code()
        );
    }
}
