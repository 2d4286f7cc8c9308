//! GET /students/{student_id} — student dashboard projection.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::dashboard::dashboard_response::StudentDashboard,
};

/// Handler: GET /students/{student_id}
pub async fn student_dashboard(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
) -> AppResult<Response> {
    let Some(profile) = state.profiles.student_profile(&student_id).await? else {
        return Err(AppError::NotFound);
    };

    let grades = state.profiles.grades(&student_id).await?;
    let attendance = state.profiles.attendance(&student_id).await?;

    Ok(ApiResponse::success(StudentDashboard {
        profile,
        grades,
        attendance,
    })
    .into_response_with_status(StatusCode::OK))
}
