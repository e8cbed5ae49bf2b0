use axum::extract::{Path, State};
use axum::Json;
use tracing::instrument;

use crate::errors::ApiError;
use crate::progress::dto::{ProgressReport, WeeklyStats};
use crate::progress::services;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ProgressReport>, ApiError> {
    let report = services::build_report(&state, user_id).await?;
    Ok(Json(report))
}

#[instrument(skip(state))]
pub async fn get_weekly_stats(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<WeeklyStats>, ApiError> {
    let stats = services::weekly_stats(&state, user_id).await?;
    Ok(Json(stats))
}
