//! GET /parents/{uid} — parent dashboard projection.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::dashboard::dashboard_response::{ParentDashboard, StudentSection},
};

/// Handler: GET /parents/{uid}
///
/// Read-only projection of the parent's profile plus each linked student's
/// profile, grades, and attendance. Students whose profile document has
/// gone missing are skipped rather than failing the whole dashboard. Empty
/// grade/attendance lists are returned as-is.
pub async fn parent_dashboard(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> AppResult<Response> {
    let Some(profile) = state.profiles.parent_profile(&uid).await? else {
        return Err(AppError::NotFound);
    };

    let mut students = Vec::with_capacity(profile.student_ids.len());
    for student_id in &profile.student_ids {
        let Some(student) = state.profiles.student_profile(student_id).await? else {
            continue;
        };
        let grades = state.profiles.grades(student_id).await?;
        let attendance = state.profiles.attendance(student_id).await?;
        students.push(StudentSection {
            profile: student,
            grades,
            attendance,
        });
    }

    Ok(ApiResponse::success(ParentDashboard { profile, students })
        .into_response_with_status(StatusCode::OK))
}
