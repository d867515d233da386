use axum::http::StatusCode;

use crate::helpers::{bundled_catalog, seeded_server};

#[tokio::test]
async fn should_list_seeded_activities_keyed_by_name() {
    let (server, _db) = seeded_server().await;

    let res = server.get("/activities").await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let body: serde_json::Value = res.json();
    let map = body.as_object().expect("response is a JSON object");
    let catalog = bundled_catalog();
    assert_eq!(map.len(), catalog.len());

    for (name, seed) in &catalog {
        let entry = map
            .get(name)
            .unwrap_or_else(|| panic!("{name} missing from response"));
        assert_eq!(entry["description"], seed.description.as_str());
        assert_eq!(entry["schedule"], seed.schedule.as_str());
        assert_eq!(entry["max_participants"], seed.max_participants);

        let participants: Vec<String> =
            serde_json::from_value(entry["participants"].clone()).unwrap();
        assert_eq!(&participants, &seed.participants);
    }
}

#[tokio::test]
async fn should_redirect_root_to_static_index() {
    let (server, _db) = seeded_server().await;

    let res = server.get("/").await;
    assert_eq!(res.status_code(), StatusCode::FOUND);
    assert_eq!(
        res.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/static/index.html")
    );
}

#[tokio::test]
async fn should_serve_static_index() {
    let (server, _db) = seeded_server().await;

    let res = server.get("/static/index.html").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert!(res.text().contains("Mergington High School"));
}

#[tokio::test]
async fn should_answer_health_probes() {
    let (server, _db) = seeded_server().await;

    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}
