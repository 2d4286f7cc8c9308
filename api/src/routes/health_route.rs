//! GET /health — chat backend health snapshot.

use std::sync::Arc;

use axum::{Json, extract::State};
use ai_chat_service::HealthStatus;

use crate::core::app_state::AppState;

/// Handler: GET /health
///
/// The probe is resilient: an unreachable backend yields `ok: false` in the
/// payload, not an error status.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(state.chat.health().await)
}
