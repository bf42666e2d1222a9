use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;
use tracker_core::domain::models::Statistics;

use super::ApiError;
use crate::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_statistics))
}

#[instrument(name = "get_statistics", skip(app_state))]
pub async fn get_statistics(
    State(app_state): State<AppState>,
) -> Result<Json<Statistics>, ApiError> {
    let statistics = app_state.tracker_service.statistics().await?;

    Ok(Json(statistics))
}
