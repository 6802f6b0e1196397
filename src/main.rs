use rec_ingest::{
    api::{create_router, spawn_ingestion, AppState},
    config::Config,
    services::Ingestor,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rec_ingest=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        collaborative = %config.collaborative_source,
        content_based = %config.content_based_source,
        "Starting recommendation ingestion"
    );

    // Loading is entered once, at startup
    let state = AppState::new();
    spawn_ingestion(state.clone(), Ingestor::from_config(&config));

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
