use thiserror::Error;

/// Shown by the login form when the request never produced a usable reply.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Passwords do not match.")]
    PasswordMismatch,

    /// Non-2xx reply; carries the server's message or a form-specific default.
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl AuthError {
    /// Text shown to the user. Server and validation messages pass through
    /// verbatim; transport failures collapse to a generic string.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::PasswordMismatch | AuthError::Rejected(_) => self.to_string(),
            AuthError::Network(_) | AuthError::Decode(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

impl From<AuthError> for String {
    fn from(err: AuthError) -> Self {
        err.user_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_is_verbatim() {
        let err = AuthError::Rejected("Account locked".to_string());
        assert_eq!(err.user_message(), "Account locked");
    }

    #[test]
    fn test_transport_failures_are_generic() {
        assert_eq!(AuthError::Network("dns".into()).user_message(), GENERIC_FAILURE);
        assert_eq!(AuthError::Decode("eof".into()).user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_password_mismatch_text() {
        let msg: String = AuthError::PasswordMismatch.into();
        assert_eq!(msg, "Passwords do not match.");
    }
}
