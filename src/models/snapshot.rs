use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContentId, RecommendationList, RecommendationMap};

/// Lifecycle of the single ingestion run a process performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestionPhase {
    Loading,
    /// Both sources ingested
    Ready,
    /// A source failed and the synthetic catalogue was served instead
    Degraded,
}

/// Loading flag and error message as presented to readers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionState {
    pub loading: bool,
    pub error: Option<String>,
}

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSnapshot {
    pub content_ids: Vec<ContentId>,
    pub collaborative_recommendations: RecommendationMap,
    pub content_based_recommendations: RecommendationMap,
    pub loading: bool,
    pub error: Option<String>,
    pub phase: IngestionPhase,
    pub run_id: Option<Uuid>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Both lists for one selected identifier
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationLookup {
    pub content_id: ContentId,
    pub collaborative: RecommendationList,
    pub content_based: RecommendationList,
}

impl RecommendationSnapshot {
    /// Snapshot observed while the run is outstanding
    pub fn loading() -> Self {
        Self {
            content_ids: Vec::new(),
            collaborative_recommendations: RecommendationMap::new(),
            content_based_recommendations: RecommendationMap::new(),
            loading: true,
            error: None,
            phase: IngestionPhase::Loading,
            run_id: None,
            completed_at: None,
        }
    }

    pub fn state(&self) -> IngestionState {
        IngestionState {
            loading: self.loading,
            error: self.error.clone(),
        }
    }

    /// Looks the identifier up in both maps; absent keys yield empty lists
    pub fn lookup(&self, content_id: &str) -> RecommendationLookup {
        RecommendationLookup {
            content_id: ContentId::from(content_id),
            collaborative: self
                .collaborative_recommendations
                .get(content_id)
                .cloned()
                .unwrap_or_default(),
            content_based: self
                .content_based_recommendations
                .get(content_id)
                .cloned()
                .unwrap_or_default(),
        }
    }
}
