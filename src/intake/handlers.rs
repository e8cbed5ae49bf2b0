use axum::extract::{Path, State};
use axum::Json;
use tracing::instrument;

use crate::errors::ApiError;
use crate::intake::dto::{
    LogCaloriesRequest, LogCaloriesResponse, LogWaterRequest, LogWaterResponse,
};
use crate::intake::services;
use crate::state::AppState;

#[instrument(skip(state, body))]
pub async fn log_water(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(body): Json<LogWaterRequest>,
) -> Result<Json<LogWaterResponse>, ApiError> {
    let response = services::log_water(&state, user_id, body).await?;
    Ok(Json(response))
}

#[instrument(skip(state, body))]
pub async fn log_calories(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(body): Json<LogCaloriesRequest>,
) -> Result<Json<LogCaloriesResponse>, ApiError> {
    let response = services::log_calories(&state, user_id, body).await?;
    Ok(Json(response))
}
