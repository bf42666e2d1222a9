use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use tracing::instrument;
use tracker_core::domain::models::Filter;

use super::ApiError;
use crate::{
    adapters::inbound::http::{FilterResponse, OnboardingResponse},
    app_state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/filter", get(get_filter).put(select_filter))
        .route("/onboarding", get(get_onboarding).put(complete_onboarding))
}

#[instrument(name = "get_filter", skip(app_state))]
pub async fn get_filter(
    State(app_state): State<AppState>,
) -> Result<Json<FilterResponse>, ApiError> {
    let filter = app_state.tracker_service.selected_filter().await?;

    Ok(Json(FilterResponse { filter }))
}

#[derive(Debug, Deserialize)]
pub struct SelectFilterPayload {
    filter: Filter,
}

#[instrument(name = "select_filter", skip(app_state))]
pub async fn select_filter(
    State(app_state): State<AppState>,
    Json(body): Json<SelectFilterPayload>,
) -> Result<StatusCode, ApiError> {
    app_state.tracker_service.select_filter(body.filter).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[instrument(name = "get_onboarding", skip(app_state))]
pub async fn get_onboarding(
    State(app_state): State<AppState>,
) -> Result<Json<OnboardingResponse>, ApiError> {
    let completed = app_state.tracker_service.onboarding_completed().await?;

    Ok(Json(OnboardingResponse { completed }))
}

#[instrument(name = "complete_onboarding", skip(app_state))]
pub async fn complete_onboarding(
    State(app_state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    app_state.tracker_service.complete_onboarding().await?;

    Ok(StatusCode::NO_CONTENT)
}
