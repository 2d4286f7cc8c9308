//! Error taxonomy for the identity boundary.
//!
//! Known provider error conditions map to specific user-facing messages;
//! everything else falls back to a generic one. Technical detail stays in
//! the error itself (and the logs), never in what users see.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    /// Unknown user or wrong password. The provider distinguishes the two;
    /// users must not be able to.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The provider throttled this account or address.
    #[error("too many attempts")]
    TooManyRequests,

    /// Signup with an email that already has an account.
    #[error("email already in use")]
    EmailExists,

    /// Signup password below the provider's minimum strength.
    #[error("password too weak")]
    WeakPassword,

    /// A provider error condition this portal does not recognize.
    #[error("unrecognized provider error: {0}")]
    Unrecognized(String),

    /// Network/transport failure talking to the provider.
    #[error("identity transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider response could not be decoded.
    #[error("identity decode error: {0}")]
    Decode(String),
}

impl IdentityError {
    /// Maps a provider error code (e.g. `EMAIL_NOT_FOUND`) to the taxonomy.
    ///
    /// Codes may carry a trailing detail after a colon
    /// (`WEAK_PASSWORD : Password should be at least 6 characters`), so
    /// matching is prefix-based.
    pub fn from_provider_code(code: &str) -> Self {
        let code = code.trim();
        if code.starts_with("EMAIL_NOT_FOUND")
            || code.starts_with("INVALID_PASSWORD")
            || code.starts_with("INVALID_LOGIN_CREDENTIALS")
        {
            IdentityError::InvalidCredentials
        } else if code.starts_with("TOO_MANY_ATTEMPTS_TRY_LATER") {
            IdentityError::TooManyRequests
        } else if code.starts_with("EMAIL_EXISTS") {
            IdentityError::EmailExists
        } else if code.starts_with("WEAK_PASSWORD") {
            IdentityError::WeakPassword
        } else {
            IdentityError::Unrecognized(code.to_string())
        }
    }

    /// The message shown to end users for this condition.
    pub fn user_message(&self) -> &'static str {
        match self {
            IdentityError::InvalidCredentials => {
                "Invalid email or password. Please try again."
            }
            IdentityError::TooManyRequests => {
                "Too many failed login attempts. Please try again later."
            }
            IdentityError::EmailExists => "This email address is already in use.",
            IdentityError::WeakPassword => "Password should be at least 6 characters.",
            IdentityError::Unrecognized(_)
            | IdentityError::Transport(_)
            | IdentityError::Decode(_) => {
                "An unexpected error occurred. Please try again."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_specific_conditions() {
        assert!(matches!(
            IdentityError::from_provider_code("EMAIL_NOT_FOUND"),
            IdentityError::InvalidCredentials
        ));
        assert!(matches!(
            IdentityError::from_provider_code("INVALID_PASSWORD"),
            IdentityError::InvalidCredentials
        ));
        assert!(matches!(
            IdentityError::from_provider_code("INVALID_LOGIN_CREDENTIALS"),
            IdentityError::InvalidCredentials
        ));
        assert!(matches!(
            IdentityError::from_provider_code("TOO_MANY_ATTEMPTS_TRY_LATER"),
            IdentityError::TooManyRequests
        ));
        assert!(matches!(
            IdentityError::from_provider_code("EMAIL_EXISTS"),
            IdentityError::EmailExists
        ));
        assert!(matches!(
            IdentityError::from_provider_code(
                "WEAK_PASSWORD : Password should be at least 6 characters"
            ),
            IdentityError::WeakPassword
        ));
    }

    #[test]
    fn unknown_codes_fall_back_to_unrecognized() {
        let err = IdentityError::from_provider_code("OPERATION_NOT_ALLOWED");
        assert!(matches!(err, IdentityError::Unrecognized(_)));
        assert_eq!(
            err.user_message(),
            "An unexpected error occurred. Please try again."
        );
    }

    #[test]
    fn user_messages_are_the_fixed_portal_strings() {
        assert_eq!(
            IdentityError::InvalidCredentials.user_message(),
            "Invalid email or password. Please try again."
        );
        assert_eq!(
            IdentityError::TooManyRequests.user_message(),
            "Too many failed login attempts. Please try again later."
        );
        assert_eq!(
            IdentityError::EmailExists.user_message(),
            "This email address is already in use."
        );
        assert_eq!(
            IdentityError::WeakPassword.user_message(),
            "Password should be at least 6 characters."
        );
    }
}
