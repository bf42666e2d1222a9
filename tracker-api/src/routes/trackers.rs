use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;
use tracker_core::domain::{
    engine::ToggleAction,
    models::{Filter, NewTracker, Schedule, TrackerId, UpdateTracker},
};
use uuid::Uuid;

use super::{parse_date, ApiError};
use crate::{
    adapters::inbound::http::{SectionsResponse, ToggleCompletionResponse, TrackerResponse},
    app_state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_tracker))
        .route("/sections", get(list_sections))
        .route("/:id", put(update_tracker).delete(delete_tracker))
        .route("/:id/pin", put(set_pinned))
        .route("/:id/completions", post(toggle_completion))
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SectionsQuery {
    date: String,
    filter: Option<String>,
}

#[instrument(name = "list_sections", skip(app_state))]
pub async fn list_sections(
    State(app_state): State<AppState>,
    Query(query): Query<SectionsQuery>,
) -> Result<Json<SectionsResponse>, ApiError> {
    let reference_date = parse_date(&query.date)?;
    // Unrecognized filter names fall back to showing everything; a missing
    // one means the stored preference.
    let requested = query
        .filter
        .map(|name| name.parse::<Filter>().unwrap_or_default());

    let list = app_state
        .tracker_service
        .visible_sections(reference_date, requested)
        .await?;

    Ok(Json(list.into()))
}

// ============================================================================
// Create / Update / Delete
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrackerPayload {
    name: String,
    category: String,
    #[serde(default)]
    schedule: Schedule,
    #[serde(default)]
    color: String,
    #[serde(default)]
    emoji: String,
}

#[instrument(name = "create_tracker", skip(app_state))]
pub async fn create_tracker(
    State(app_state): State<AppState>,
    Json(body): Json<CreateTrackerPayload>,
) -> Result<(StatusCode, Json<TrackerResponse>), ApiError> {
    let request =
        NewTracker::new(body.name, body.category, body.schedule).with_appearance(body.color, body.emoji);

    let tracker = app_state.tracker_service.create_tracker(request).await?;

    Ok((StatusCode::CREATED, Json(tracker.into())))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrackerPayload {
    name: Option<String>,
    color: Option<String>,
    emoji: Option<String>,
    schedule: Option<Schedule>,
    category: Option<String>,
}

impl From<UpdateTrackerPayload> for UpdateTracker {
    fn from(body: UpdateTrackerPayload) -> Self {
        Self {
            name: body.name,
            color: body.color,
            emoji: body.emoji,
            schedule: body.schedule,
            category: body.category,
        }
    }
}

#[instrument(name = "update_tracker", skip(app_state))]
pub async fn update_tracker(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTrackerPayload>,
) -> Result<Json<TrackerResponse>, ApiError> {
    let tracker = app_state
        .tracker_service
        .update_tracker(&TrackerId::from(id), body.into())
        .await?;

    Ok(Json(tracker.into()))
}

#[instrument(name = "delete_tracker", skip(app_state))]
pub async fn delete_tracker(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app_state
        .tracker_service
        .delete_tracker(&TrackerId::from(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Pin
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PinPayload {
    pinned: bool,
}

#[instrument(name = "set_pinned", skip(app_state))]
pub async fn set_pinned(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PinPayload>,
) -> Result<Json<TrackerResponse>, ApiError> {
    let tracker = app_state
        .tracker_service
        .set_pinned(&TrackerId::from(id), body.pinned)
        .await?;

    Ok(Json(tracker.into()))
}

// ============================================================================
// Completion
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TogglePayload {
    date: String,
}

/// Toggle completion of a tracker on a date.
///
/// Future dates are answered with 422 and a `rejected` action; nothing is
/// stored.
#[instrument(name = "toggle_completion", skip(app_state))]
pub async fn toggle_completion(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<TogglePayload>,
) -> Result<(StatusCode, Json<ToggleCompletionResponse>), ApiError> {
    let date = parse_date(&body.date)?;

    let action = app_state
        .tracker_service
        .toggle_completion(&TrackerId::from(id), date)
        .await?;

    let status = match action {
        ToggleAction::Rejected => StatusCode::UNPROCESSABLE_ENTITY,
        ToggleAction::Added | ToggleAction::Removed => StatusCode::OK,
    };

    Ok((status, Json(ToggleCompletionResponse { action })))
}
