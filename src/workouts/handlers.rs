use axum::extract::{Path, State};
use axum::Json;
use tracing::instrument;

use crate::errors::ApiError;
use crate::state::AppState;
use crate::workouts::dto::{LogWorkoutRequest, LogWorkoutResponse};
use crate::workouts::services;

#[instrument(skip(state, body))]
pub async fn log_workout(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(body): Json<LogWorkoutRequest>,
) -> Result<Json<LogWorkoutResponse>, ApiError> {
    let response = services::log_workout(&state, user_id, body).await?;
    Ok(Json(response))
}
