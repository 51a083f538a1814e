mod config;
mod db;
mod errors;
mod hypermedia;
mod jobs;
mod models;
mod random_user;
mod recruiters;
mod routes;
mod seed;
mod state;
mod store;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::random_user::RandomUserClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    if config.seed_demo_data {
        seed::seed_demo_data(&db).await?;
    }

    // Initialize the external random user client
    let random_user = RandomUserClient::new(config.random_user_url.clone());
    info!("Random user client initialized ({})", config.random_user_url);

    // Build app state
    let state = AppState { db, random_user };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Default filter directive scoped to this crate. The package name is
/// hyphenated, but tracing targets carry the underscored crate name.
fn default_filter_directive(level: &str) -> String {
    format!("{}={level}", env!("CARGO_PKG_NAME").replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_targets_underscored_crate_name() {
        assert_eq!(default_filter_directive("info"), "talent_api=info");
        assert_eq!(default_filter_directive("debug"), "talent_api=debug");
    }
}
