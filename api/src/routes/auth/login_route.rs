//! POST /auth/login — delegated email+password sign-in.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppResult,
    routes::auth::auth_request::{AuthResponse, CredentialsRequest},
};

/// Handler: POST /auth/login
///
/// Known provider conditions map to their fixed user-facing messages
/// (invalid credentials, too many attempts); anything else falls back to a
/// generic one via [`AppError`].
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CredentialsRequest>,
) -> AppResult<Response> {
    let session = state.identity.sign_in(&body.email, &body.password).await?;

    Ok(ApiResponse::success(AuthResponse {
        uid: session.uid,
        email: session.email,
        id_token: session.id_token,
    })
    .into_response_with_status(StatusCode::OK))
}
