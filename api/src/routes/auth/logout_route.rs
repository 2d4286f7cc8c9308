//! POST /auth/logout — discard a session.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};
use serde::Serialize;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppResult,
    routes::auth::auth_request::LogoutRequest,
};

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub signed_out: bool,
}

/// Handler: POST /auth/logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LogoutRequest>,
) -> AppResult<Response> {
    state.identity.sign_out(&body.uid).await?;

    Ok(ApiResponse::success(LogoutResponse { signed_out: true })
        .into_response_with_status(StatusCode::OK))
}
