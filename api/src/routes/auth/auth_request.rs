use serde::{Deserialize, Serialize};

/// Request payload for /auth/login and /auth/signup.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Request payload for /auth/logout.
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub uid: String,
}

/// Response payload for successful auth calls (inside the envelope).
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub uid: String,
    pub email: String,
    /// Short-lived session token issued by the provider.
    pub id_token: String,
}
