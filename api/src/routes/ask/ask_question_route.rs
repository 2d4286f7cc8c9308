//! POST /ask_question — the chatbot endpoint.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};
use campus_navigator::{NavigatorError, ask};
use tracing::error;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /ask_question
///
/// Each request is a stateless question/answer pair; no conversation history
/// is carried server-side. Every failure mode collapses to the navigator's
/// fixed retry-later message — the technical cause is logged only.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/ask_question \
///   -H 'content-type: application/json' \
///   -d '{"question":"What are the admission requirements?"}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> Response {
    match ask(state.chat.as_ref(), &body.question).await {
        Ok(answer) => ApiResponse::success(AskResponse { answer })
            .into_response_with_status(StatusCode::OK),
        Err(e) => {
            error!(error = %e, "chatbot request failed");
            let (status, code) = match &e {
                NavigatorError::EmptyQuestion | NavigatorError::Busy => {
                    (StatusCode::BAD_REQUEST, "BAD_REQUEST")
                }
                NavigatorError::Model(_) | NavigatorError::Contract(_) => {
                    (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
                }
            };
            ApiResponse::<AskResponse>::error(code, e.user_message(), vec![])
                .into_response_with_status(status)
        }
    }
}
