use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use showquiz_api::{
    api::{create_router, AppState},
    config::Config,
    services::{providers::TvMazeProvider, TracingNotifier},
    store::{create_redis_client, RedisProfileStore, SearchCache},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let redis_client = create_redis_client(&config.redis_url)?;
    let cache = SearchCache::new(redis_client.clone());
    let provider = Arc::new(TvMazeProvider::new(cache, config.show_api_url.clone()));
    let store = Arc::new(RedisProfileStore::new(redis_client));
    let notifier = Arc::new(TracingNotifier);

    let state = AppState::new(provider, store, notifier);
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "showquiz API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
