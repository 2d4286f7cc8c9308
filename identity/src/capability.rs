use async_trait::async_trait;

use crate::error::IdentityError;

/// An authenticated session returned by the provider.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Stable user identifier issued by the provider.
    pub uid: String,
    /// The email the account was registered with.
    pub email: String,
    /// Short-lived session token for authenticated calls.
    pub id_token: String,
}

/// Abstract contract for the managed identity provider.
///
/// Production uses [`crate::RestIdentity`]; tests substitute deterministic
/// fakes without reimplementing the external service.
#[async_trait]
pub trait Identity: Send + Sync {
    /// Signs an existing user in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError>;

    /// Registers a new user with email and password.
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError>;

    /// Ends a user's session. The provider expires tokens on its own
    /// schedule; this discards the session from the portal's point of view.
    async fn sign_out(&self, uid: &str) -> Result<(), IdentityError>;
}
