use std::{sync::Arc, time::Duration};

use chrono::Utc;
use rand::Rng;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{IngestionPhase, RecommendationMap, RecommendationSnapshot, SourceKind},
    services::{
        fallback,
        normalizer::normalize_rows,
        parser::parse_rows,
        registry::IdentifierRegistry,
        sources::{source_for, TabularSource},
    },
};

/// Output of one ingestion: a map per source plus the union of their ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestedData {
    pub collaborative: RecommendationMap,
    pub content_based: RecommendationMap,
    pub registry: IdentifierRegistry,
}

/// Runs both source pipelines and settles on `Ready` or `Degraded`
pub struct Ingestor {
    collaborative: Arc<dyn TabularSource>,
    content_based: Arc<dyn TabularSource>,
    fetch_timeout: Option<Duration>,
}

impl Ingestor {
    pub fn new(
        collaborative: Arc<dyn TabularSource>,
        content_based: Arc<dyn TabularSource>,
    ) -> Self {
        Self {
            collaborative,
            content_based,
            fetch_timeout: None,
        }
    }

    /// Creates an ingestor reading the locators named in the configuration
    pub fn from_config(config: &Config) -> Self {
        let http_client = reqwest::Client::new();

        Self::new(
            source_for(&config.collaborative_source, http_client.clone()),
            source_for(&config.content_based_source, http_client),
        )
        .with_fetch_timeout(config.fetch_timeout())
    }

    /// Bounds each source read; expiry counts as a transport failure
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    async fn read(&self, source: &dyn TabularSource) -> AppResult<Vec<u8>> {
        match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, source.fetch_bytes())
                .await
                .map_err(|_| {
                    AppError::transport(
                        source.locator(),
                        None,
                        format!("timed out after {}ms", limit.as_millis()),
                    )
                })?,
            None => source.fetch_bytes().await,
        }
    }

    /// Reader, parser and normalizer for one source. The read is the only await.
    async fn run_pipeline(
        &self,
        kind: SourceKind,
        source: &dyn TabularSource,
    ) -> AppResult<RecommendationMap> {
        let bytes = self.read(source).await.map_err(|e| {
            tracing::error!(
                source = %kind,
                status = ?e.status(),
                error = %e,
                "Failed to read recommendations"
            );
            e
        })?;

        let rows = parse_rows(&bytes).map_err(|e| {
            tracing::error!(source = %kind, error = %e, "Failed to parse recommendations");
            e
        })?;

        let map = normalize_rows(&rows, kind);

        tracing::info!(
            source = %kind,
            rows = rows.len(),
            content_ids = map.len(),
            "Recommendations ingested"
        );

        Ok(map)
    }

    /// Ingests both sources; fails when either one does
    ///
    /// Both pipelines are awaited to completion before any result is inspected. When both
    /// fail the collaborative error is reported.
    pub async fn ingest(&self) -> AppResult<IngestedData> {
        let (collaborative, content_based) = tokio::join!(
            self.run_pipeline(SourceKind::Collaborative, self.collaborative.as_ref()),
            self.run_pipeline(SourceKind::ContentBased, self.content_based.as_ref()),
        );

        let collaborative = collaborative?;
        let content_based = content_based?;

        let registry = IdentifierRegistry::new()
            .merge(collaborative.keys().cloned())
            .merge(content_based.keys().cloned());

        Ok(IngestedData {
            collaborative,
            content_based,
            registry,
        })
    }

    /// Performs the single run this ingestor is good for, using unseeded fallback shuffling
    pub async fn run(self) -> RecommendationSnapshot {
        self.run_with_fallback(fallback::generate_unseeded).await
    }

    /// Like [`Ingestor::run`], shuffling fallback lists with the given generator
    pub async fn run_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> RecommendationSnapshot {
        self.run_with_fallback(|| fallback::generate(rng)).await
    }

    async fn run_with_fallback<F>(self, fallback: F) -> RecommendationSnapshot
    where
        F: FnOnce() -> IngestedData,
    {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("ingestion", run_id = %run_id);

        async move {
            tracing::info!("Loading recommendations");

            match self.ingest().await {
                Ok(data) => {
                    tracing::info!(content_ids = data.registry.len(), "Ingestion ready");
                    finish(run_id, IngestionPhase::Ready, data, None)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Ingestion failed, loading sample data as fallback");
                    finish(run_id, IngestionPhase::Degraded, fallback(), Some(e.to_string()))
                }
            }
        }
        .instrument(span)
        .await
    }
}

fn finish(
    run_id: Uuid,
    phase: IngestionPhase,
    data: IngestedData,
    error: Option<String>,
) -> RecommendationSnapshot {
    RecommendationSnapshot {
        content_ids: data.registry.into_vec(),
        collaborative_recommendations: data.collaborative,
        content_based_recommendations: data.content_based,
        loading: false,
        error,
        phase,
        run_id: Some(run_id),
        completed_at: Some(Utc::now()),
    }
}
