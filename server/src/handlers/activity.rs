use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::ActivitiesServiceError;
use crate::state::AppState;
use crate::usecase::activity::ListActivitiesUseCase;

// ── GET /activities ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ActivityDetail {
    pub description: String,
    pub schedule: String,
    pub max_participants: i32,
    pub participants: Vec<String>,
}

/// The catalog as a JSON object keyed by activity name. `BTreeMap` keeps the
/// keys in a stable order across requests.
pub async fn get_activities(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, ActivityDetail>>, ActivitiesServiceError> {
    let usecase = ListActivitiesUseCase {
        activities: state.activity_repo(),
        enrollments: state.enrollment_repo(),
    };
    let rosters = usecase.execute().await?;
    let body = rosters
        .into_iter()
        .map(|roster| {
            (
                roster.activity.name,
                ActivityDetail {
                    description: roster.activity.description,
                    schedule: roster.activity.schedule,
                    max_participants: roster.activity.max_participants,
                    participants: roster.participants,
                },
            )
        })
        .collect();
    Ok(Json(body))
}
