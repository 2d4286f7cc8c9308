//! POST /auth/signup — delegated email+password registration.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppResult,
    routes::auth::auth_request::{AuthResponse, CredentialsRequest},
};

/// Handler: POST /auth/signup
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CredentialsRequest>,
) -> AppResult<Response> {
    let session = state.identity.sign_up(&body.email, &body.password).await?;

    Ok(ApiResponse::success(AuthResponse {
        uid: session.uid,
        email: session.email,
        id_token: session.id_token,
    })
    .into_response_with_status(StatusCode::CREATED))
}
