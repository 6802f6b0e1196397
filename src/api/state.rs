use std::sync::Arc;

use tokio::{sync::RwLock, task::JoinHandle};

use crate::{models::RecommendationSnapshot, services::Ingestor};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<RwLock<RecommendationSnapshot>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state that reports `loading` until a run publishes its snapshot
    pub fn new() -> Self {
        Self::with_snapshot(RecommendationSnapshot::loading())
    }

    pub fn with_snapshot(snapshot: RecommendationSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Replaces the published snapshot wholesale
    pub async fn publish(&self, snapshot: RecommendationSnapshot) {
        let mut current = self.snapshot.write().await;
        *current = snapshot;
    }
}

/// Starts the process's one ingestion run in the background
pub fn spawn_ingestion(state: AppState, ingestor: Ingestor) -> JoinHandle<()> {
    tokio::spawn(async move {
        let snapshot = ingestor.run().await;
        state.publish(snapshot).await;
    })
}
