use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::models::{ContentId, IngestionState, RecommendationLookup, RecommendationSnapshot};

use super::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIdsResponse {
    pub content_ids: Vec<ContentId>,
    #[serde(flatten)]
    pub state: IngestionState,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Full snapshot as last published
pub async fn get_snapshot(State(state): State<AppState>) -> Json<RecommendationSnapshot> {
    let snapshot = state.snapshot.read().await;
    Json(snapshot.clone())
}

/// Identifiers available for selection, with the ingestion status banner fields
pub async fn get_content_ids(State(state): State<AppState>) -> Json<ContentIdsResponse> {
    let snapshot = state.snapshot.read().await;
    Json(ContentIdsResponse {
        content_ids: snapshot.content_ids.clone(),
        state: snapshot.state(),
    })
}

/// Both recommendation lists for one identifier; unknown ids get empty lists
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(content_id): Path<String>,
) -> Json<RecommendationLookup> {
    let snapshot = state.snapshot.read().await;
    let lookup = snapshot.lookup(&content_id);

    tracing::debug!(
        content_id = %content_id,
        collaborative = lookup.collaborative.len(),
        content_based = lookup.content_based.len(),
        "Recommendations looked up"
    );

    Json(lookup)
}
