use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cinespin_api::config::Config;
use cinespin_api::db;
use cinespin_api::routes::create_router;
use cinespin_api::services::providers::RecEngineProvider;
use cinespin_api::state::AppState;
use cinespin_api::stores;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Redis is best-effort: without it the service still runs, just with no
    // lookup cache and no store snapshots.
    let (cache, cache_writer) = match db::create_redis_client(&config.redis_url) {
        Ok(client) => {
            let (cache, handle) = db::Cache::new(client).await;
            (Some(cache), Some(handle))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Redis unavailable, caching and snapshots disabled");
            (None, None)
        }
    };

    let provider = Arc::new(RecEngineProvider::new(config.recommender_url.clone()));
    let state = AppState::new(provider, cache);
    stores::hydrate(&state).await;

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(addr = %addr, backend = %config.recommender_url, "cinespin-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Flush pending cache and snapshot writes before exiting
    if let Some(writer) = cache_writer {
        writer.shutdown().await;
    }

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
