use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::error::ActivitiesServiceError;
use crate::state::AppState;
use crate::usecase::enrollment::{SignUpInput, SignUpUseCase, UnregisterInput, UnregisterUseCase};

#[derive(Deserialize)]
pub struct EnrollmentQuery {
    pub email: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ── POST /activities/{activity_name}/signup ──────────────────────────────────

pub async fn signup_for_activity(
    Path(activity_name): Path<String>,
    Query(query): Query<EnrollmentQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ActivitiesServiceError> {
    let usecase = SignUpUseCase {
        activities: state.activity_repo(),
        enrollments: state.enrollment_repo(),
    };
    usecase
        .execute(SignUpInput {
            activity_name: activity_name.clone(),
            email: query.email.clone(),
        })
        .await?;
    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

// ── DELETE /activities/{activity_name}/unregister ────────────────────────────

pub async fn unregister_from_activity(
    Path(activity_name): Path<String>,
    Query(query): Query<EnrollmentQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ActivitiesServiceError> {
    let usecase = UnregisterUseCase {
        activities: state.activity_repo(),
        enrollments: state.enrollment_repo(),
    };
    usecase
        .execute(UnregisterInput {
            activity_name: activity_name.clone(),
            email: query.email.clone(),
        })
        .await?;
    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
