//! Process entry point: configuration, store clients, router, listener.

use std::sync::Arc;

use bookcase_core::{ActivityCache, CatalogService};
use bookcase_elastic::ElasticStore;
use bookcase_redis::RedisActivityStore;
use bookcase_server::config::Config;
use bookcase_server::routes;
use bookcase_server::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,bookcase=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    let store = ElasticStore::builder()
        .server(config.elastic_url.clone())
        .index(config.books_index.clone())
        .build();
    let activity_backend = RedisActivityStore::builder()
        .server(config.redis_url.clone())
        .build()?;

    let state = Arc::new(AppState {
        catalog: CatalogService::new(store),
        activity: ActivityCache::with_capacity(activity_backend, config.activity_capacity),
    });

    let app = routes::router(state);

    info!(addr = %config.bind_addr, index = %config.books_index, "bookcase listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
