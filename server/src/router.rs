use std::path::Path;

use axum::{
    Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{
    activity::get_activities,
    enrollment::{signup_for_activity, unregister_from_activity},
};
use crate::health::{healthz, readyz};
use crate::middleware::request_id_layer;
use crate::state::AppState;

async fn root_redirect() -> impl IntoResponse {
    // 302 Found rather than axum's 303/307 redirect helpers.
    (
        StatusCode::FOUND,
        [(header::LOCATION, "/static/index.html")],
    )
}

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Landing page
        .route("/", get(root_redirect))
        // Activities
        .route("/activities", get(get_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(signup_for_activity),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_from_activity),
        )
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
