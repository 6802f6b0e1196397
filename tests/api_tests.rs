use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use rec_ingest::{
    api::{create_router, AppState},
    models::{ContentId, IngestionPhase, RecommendationEntry, RecommendationSnapshot},
};

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ready_state() -> AppState {
    let mut snapshot = RecommendationSnapshot::loading();
    snapshot.loading = false;
    snapshot.phase = IngestionPhase::Ready;
    snapshot.content_ids = vec![ContentId::from("p"), ContentId::from("q")];
    snapshot.collaborative_recommendations.insert(
        ContentId::from("p"),
        vec![
            RecommendationEntry::new("a", 5.0),
            RecommendationEntry::new("b", 4.8),
        ],
    );
    snapshot
        .content_based_recommendations
        .insert(ContentId::from("q"), vec![RecommendationEntry::new("c", 0.95)]);
    AppState::with_snapshot(snapshot)
}

#[tokio::test]
async fn test_health_check() {
    let app = create_router(AppState::new());
    let (status, body) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_snapshot_while_loading() {
    let app = create_router(AppState::new());
    let (status, body) = get_json(app, "/api/v1/snapshot").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loading"], true);
    assert!(body["error"].is_null());
    assert!(body["contentIds"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_content_ids() {
    let app = create_router(ready_state());
    let (status, body) = get_json(app, "/api/v1/content-ids").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contentIds"], serde_json::json!(["p", "q"]));
    assert_eq!(body["loading"], false);
    assert!(body["error"].is_null());
    assert!(body.get("state").is_none());
}

#[tokio::test]
async fn test_recommendations_for_known_id() {
    let app = create_router(ready_state());
    let (status, body) = get_json(app, "/api/v1/recommendations/p").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contentId"], "p");
    let collaborative = body["collaborative"].as_array().unwrap();
    assert_eq!(collaborative.len(), 2);
    assert_eq!(collaborative[0]["contentId"], "a");
    assert_eq!(collaborative[0]["score"], 5.0);
    assert!(body["contentBased"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_recommendations_for_unknown_id_are_empty() {
    let app = create_router(ready_state());
    let (status, body) = get_json(app, "/api/v1/recommendations/nope").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["collaborative"].as_array().unwrap().is_empty());
    assert!(body["contentBased"].as_array().unwrap().is_empty());
}
