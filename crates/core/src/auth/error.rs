use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing or malformed Authorization header")]
    MissingCredentials,

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("token has no subject claim")]
    MissingSubject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "missing or malformed Authorization header"
        );
        assert_eq!(
            AuthError::MalformedToken("InvalidToken".to_string()).to_string(),
            "malformed token: InvalidToken"
        );
    }
}
