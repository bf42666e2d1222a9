use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use super::ApiError;
use crate::{adapters::inbound::http::CategoryResponse, app_state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:title", delete(delete_category))
}

#[instrument(name = "list_categories", skip(app_state))]
pub async fn list_categories(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = app_state.tracker_service.list_categories().await?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryPayload {
    title: String,
}

#[instrument(name = "create_category", skip(app_state))]
pub async fn create_category(
    State(app_state): State<AppState>,
    Json(body): Json<CreateCategoryPayload>,
) -> Result<StatusCode, ApiError> {
    app_state
        .tracker_service
        .create_category(&body.title)
        .await?;

    Ok(StatusCode::CREATED)
}

#[instrument(name = "delete_category", skip(app_state))]
pub async fn delete_category(
    State(app_state): State<AppState>,
    Path(title): Path<String>,
) -> Result<StatusCode, ApiError> {
    app_state.tracker_service.delete_category(&title).await?;

    Ok(StatusCode::NO_CONTENT)
}
