use axum::http::StatusCode;
use sea_orm::{EntityTrait, PaginatorTrait};

use mergington_activities::domain::repository::{ActivityRepository, EnrollmentRepository};
use mergington_activities::error::ActivitiesServiceError;
use mergington_activities::infra::db::{DbActivityRepository, DbEnrollmentRepository};
use mergington_activities_schema::enrollments;

use crate::helpers::{seeded_db, seeded_server};

#[tokio::test]
async fn should_sign_up_new_student() {
    let (server, _db) = seeded_server().await;

    let res = server
        .post("/activities/Chess%20Club/signup")
        .add_query_param("email", "newcomer@mergington.edu")
        .await;

    assert_eq!(res.status_code(), StatusCode::OK);
    let body: serde_json::Value = res.json();
    assert_eq!(
        body["message"],
        "Signed up newcomer@mergington.edu for Chess Club"
    );

    let activities: serde_json::Value = server.get("/activities").await.json();
    let participants = activities["Chess Club"]["participants"].as_array().unwrap();
    assert_eq!(
        participants
            .iter()
            .filter(|p| p.as_str() == Some("newcomer@mergington.edu"))
            .count(),
        1
    );
}

#[tokio::test]
async fn should_return_not_found_for_unknown_activity() {
    let (server, db) = seeded_server().await;
    let rows_before = enrollments::Entity::find().count(&db).await.unwrap();

    let res = server
        .post("/activities/Knitting%20Circle/signup")
        .add_query_param("email", "someone@mergington.edu")
        .await;

    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json();
    assert_eq!(body["detail"], "Activity not found");

    let rows_after = enrollments::Entity::find().count(&db).await.unwrap();
    assert_eq!(rows_after, rows_before);
}

#[tokio::test]
async fn should_reject_duplicate_signup() {
    let (server, db) = seeded_server().await;
    let rows_before = enrollments::Entity::find().count(&db).await.unwrap();

    // michael@mergington.edu is on the Chess Club roster in the seed catalog.
    let res = server
        .post("/activities/Chess%20Club/signup")
        .add_query_param("email", "michael@mergington.edu")
        .await;

    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json();
    assert_eq!(body["detail"], "Student is already signed up");

    let rows_after = enrollments::Entity::find().count(&db).await.unwrap();
    assert_eq!(rows_after, rows_before);
}

#[tokio::test]
async fn should_reject_signup_when_activity_is_full() {
    let (server, _db) = seeded_server().await;

    // Math Club seeds two students and caps at ten.
    for i in 0..8 {
        let res = server
            .post("/activities/Math%20Club/signup")
            .add_query_param("email", format!("student{i}@mergington.edu"))
            .await;
        assert_eq!(res.status_code(), StatusCode::OK);
    }

    let res = server
        .post("/activities/Math%20Club/signup")
        .add_query_param("email", "latecomer@mergington.edu")
        .await;

    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json();
    assert_eq!(body["detail"], "Activity is full");
}

#[tokio::test]
async fn should_surface_unique_violation_as_duplicate_signup() {
    let db = seeded_db().await;
    let activities = DbActivityRepository { db: db.clone() };
    let enrollments = DbEnrollmentRepository { db };

    let chess = activities
        .find_by_name("Chess Club")
        .await
        .unwrap()
        .expect("Chess Club is seeded");

    // Insert directly, bypassing the duplicate pre-check in the usecase.
    let result = enrollments.create(chess.id, "michael@mergington.edu").await;

    assert!(matches!(
        result,
        Err(ActivitiesServiceError::AlreadySignedUp)
    ));
}
