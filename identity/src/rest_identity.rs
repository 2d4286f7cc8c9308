//! REST client for an identity-toolkit style provider.
//!
//! Endpoints, keyed by a browser API key:
//! - `POST {endpoint}/v1/accounts:signInWithPassword?key={key}`
//! - `POST {endpoint}/v1/accounts:signUp?key={key}`
//!
//! Error bodies look like `{"error": {"message": "EMAIL_NOT_FOUND"}}`; the
//! message code is mapped through [`IdentityError::from_provider_code`].

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::capability::{AuthSession, Identity};
use crate::error::IdentityError;

/// Minimum password length enforced locally on signup, mirroring the
/// provider's own policy so obviously-weak passwords never leave the portal.
const MIN_PASSWORD_LEN: usize = 6;

/// REST implementation of the [`Identity`] capability.
pub struct RestIdentity {
    client: reqwest::Client,
    url_sign_in: String,
    url_sign_up: String,
}

impl RestIdentity {
    /// Creates a client for the given provider endpoint and API key.
    ///
    /// # Errors
    /// - [`IdentityError::Decode`] if the endpoint is not http(s)
    /// - [`IdentityError::Transport`] if the HTTP client cannot be built
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self, IdentityError> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(IdentityError::Decode(format!(
                "invalid identity endpoint: {endpoint:?}"
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        let base = endpoint.trim_end_matches('/');
        Ok(Self {
            client,
            url_sign_in: format!("{base}/v1/accounts:signInWithPassword?key={api_key}"),
            url_sign_up: format!("{base}/v1/accounts:signUp?key={api_key}"),
        })
    }

    /// Creates the client from `IDENTITY_URL` and `IDENTITY_API_KEY`.
    pub fn from_env() -> Result<Self, IdentityError> {
        let endpoint = std::env::var("IDENTITY_URL")
            .map_err(|_| IdentityError::Decode("IDENTITY_URL must be set".into()))?;
        let api_key = std::env::var("IDENTITY_API_KEY")
            .map_err(|_| IdentityError::Decode("IDENTITY_API_KEY must be set".into()))?;
        Self::new(&endpoint, &api_key)
    }

    async fn post_credentials(
        &self,
        url: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, IdentityError> {
        let body = CredentialsRequest {
            email,
            password,
            return_secure_token: true,
        };

        let resp = self.client.post(url).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let code = serde_json::from_str::<ProviderErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            warn!(%status, code = %code, "identity provider rejected the request");
            return Err(IdentityError::from_provider_code(&code));
        }

        let out: CredentialsResponse = resp
            .json()
            .await
            .map_err(|e| IdentityError::Decode(format!("serde error: {e}")))?;

        Ok(AuthSession {
            uid: out.local_id,
            email: out.email,
            id_token: out.id_token,
        })
    }
}

#[async_trait]
impl Identity for RestIdentity {
    #[instrument(skip_all, fields(email = %email))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError> {
        self.post_credentials(&self.url_sign_in, email, password)
            .await
    }

    #[instrument(skip_all, fields(email = %email))]
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(IdentityError::WeakPassword);
        }
        self.post_credentials(&self.url_sign_up, email, password)
            .await
    }

    async fn sign_out(&self, uid: &str) -> Result<(), IdentityError> {
        // Tokens expire provider-side; nothing to revoke remotely.
        debug!(%uid, "session discarded");
        Ok(())
    }
}

/* ==========================
HTTP payloads
========================== */

#[derive(Debug, Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
struct CredentialsResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
    #[serde(rename = "idToken")]
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorInner,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorInner {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_endpoint() {
        assert!(RestIdentity::new("identity.example.com", "key").is_err());
        assert!(RestIdentity::new("", "key").is_err());
    }

    #[test]
    fn urls_carry_the_api_key() {
        let id = RestIdentity::new("https://identity.example.com/", "k-123").unwrap();
        assert_eq!(
            id.url_sign_in,
            "https://identity.example.com/v1/accounts:signInWithPassword?key=k-123"
        );
        assert_eq!(
            id.url_sign_up,
            "https://identity.example.com/v1/accounts:signUp?key=k-123"
        );
    }

    #[tokio::test]
    async fn short_signup_password_never_reaches_the_provider() {
        // Endpoint is unroutable on purpose: a weak password must fail
        // locally before any request is attempted.
        let id = RestIdentity::new("http://127.0.0.1:1", "key").unwrap();
        let err = id.sign_up("parent@example.com", "12345").await.unwrap_err();
        assert!(matches!(err, IdentityError::WeakPassword));
    }

    #[test]
    fn provider_error_body_decodes() {
        let body = r#"{"error": {"code": 400, "message": "EMAIL_NOT_FOUND", "errors": []}}"#;
        let parsed: ProviderErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "EMAIL_NOT_FOUND");
    }
}
