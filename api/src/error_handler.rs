use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ai_chat_service::AiChatError;
use identity::IdentityError;
use profile_store::ProfileStoreError;
use thiserror::Error;
use tracing::error;

use crate::core::http::response_envelope::ApiResponse;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error(transparent)]
    ChatConfig(#[from] AiChatError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    // --- Capability boundaries ---
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    ProfileStore(#[from] ProfileStoreError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // startup-only
            AppError::MissingEnv(_) | AppError::ChatConfig(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,

            AppError::Identity(e) => match e {
                IdentityError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                IdentityError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
                IdentityError::EmailExists => StatusCode::CONFLICT,
                IdentityError::WeakPassword => StatusCode::BAD_REQUEST,
                _ => StatusCode::BAD_GATEWAY,
            },

            AppError::ProfileStore(_) => StatusCode::BAD_GATEWAY,

            // 5xx
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingEnv(_) => "MISSING_ENV",
            AppError::ChatConfig(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound => "NOT_FOUND",
            AppError::Identity(e) => match e {
                IdentityError::InvalidCredentials => "INVALID_CREDENTIALS",
                IdentityError::TooManyRequests => "TOO_MANY_REQUESTS",
                IdentityError::EmailExists => "EMAIL_EXISTS",
                IdentityError::WeakPassword => "WEAK_PASSWORD",
                _ => "IDENTITY_ERROR",
            },
            AppError::ProfileStore(_) => "STORE_ERROR",
        }
    }

    /// The message exposed to clients.
    ///
    /// Capability errors carry their fixed user-facing texts; technical
    /// detail stays in the logs.
    fn user_message(&self) -> String {
        match self {
            AppError::Identity(e) => e.user_message().to_string(),
            AppError::ProfileStore(_) => {
                "Could not load records at this moment. Please try again later.".to_string()
            }
            AppError::NotFound => "Not found.".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Operators get the technical error; clients get the mapped message.
        error!(error = %self, code = self.error_code(), "request failed");

        let status = self.status_code();
        ApiResponse::<()>::error(self.error_code(), self.user_message(), vec![])
            .into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert common Axum rejections to `AppError`.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(err: axum::extract::rejection::PathRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
