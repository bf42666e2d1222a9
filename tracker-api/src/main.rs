mod adapters;
mod app_state;
mod config;
mod repositories;
mod router;
mod routes;

use std::{sync::Arc, time::Duration};

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use tracker_core::domain::services::TrackerServiceImpl;

use crate::{
    app_state::AppState,
    repositories::{
        PgCategoryRepository, PgCompletionRepository, PgPreferencesRepository,
        PgTrackerRepository,
    },
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tracker_api=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::read_config().expect("Failed to read configuration");

    let connection_pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(config.database.with_db());
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to run database migrations");

    let service = TrackerServiceImpl::new(
        Arc::new(PgCategoryRepository::new(connection_pool.clone())),
        Arc::new(PgTrackerRepository::new(connection_pool.clone())),
        Arc::new(PgCompletionRepository::new(connection_pool.clone())),
    )
    .with_preferences(Arc::new(PgPreferencesRepository::new(connection_pool)));

    let app = router::create(AppState::new(Arc::new(service)), &config);

    let addr = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await.expect("Server error");
}
