use axum::extract::{Path, State};
use axum::Json;
use time::OffsetDateTime;
use tracing::{info, instrument};

use crate::errors::ApiError;
use crate::profile::dto::UpsertProfileRequest;
use crate::profile::repo::{self, UserProfile};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = repo::find(&state.db, user_id)
        .await?
        .ok_or(ApiError::ProfileMissing)?;
    Ok(Json(profile))
}

#[instrument(skip(state, body))]
pub async fn upsert_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(body): Json<UpsertProfileRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    validate(&body)?;
    let profile = repo::upsert(&state.db, user_id, &body).await?;
    info!(user_id, "profile saved");
    Ok(Json(profile))
}

fn validate(req: &UpsertProfileRequest) -> Result<(), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::validation("name must not be empty"));
    }
    if req.city.trim().is_empty() {
        return Err(ApiError::validation("city must not be empty"));
    }
    if !(req.height > 0.0) {
        return Err(ApiError::validation("height must be positive"));
    }
    if !(req.weight > 0.0) {
        return Err(ApiError::validation("weight must be positive"));
    }
    if req.birth_date > OffsetDateTime::now_utc().date() {
        return Err(ApiError::validation("birth_date must not be in the future"));
    }
    if req.preferred_water_ml < 0
        || req.preferred_calories_kcal < 0
        || req.preferred_workout_minutes < 0
    {
        return Err(ApiError::validation("preferences must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::repo::Gender;
    use time::macros::date;

    fn valid_request() -> UpsertProfileRequest {
        UpsertProfileRequest {
            name: "Pavel".into(),
            birth_date: date!(1994 - 06 - 02),
            city: "Lisbon".into(),
            height: 180.0,
            weight: 80.0,
            gender: Gender::Male,
            preferred_water_ml: 0,
            preferred_calories_kcal: 0,
            preferred_workout_minutes: 0,
        }
    }

    #[test]
    fn accepts_valid_profile() {
        assert!(validate(&valid_request()).is_ok());
    }

    #[test]
    fn rejects_non_positive_measurements() {
        let mut req = valid_request();
        req.height = 0.0;
        assert!(validate(&req).is_err());

        let mut req = valid_request();
        req.weight = -3.0;
        assert!(validate(&req).is_err());
    }

    #[test]
    fn rejects_future_birth_date() {
        let mut req = valid_request();
        req.birth_date = OffsetDateTime::now_utc().date().next_day().unwrap();
        assert!(validate(&req).is_err());
    }

    #[test]
    fn gender_deserializes_lowercase() {
        let g: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(g, Gender::Female);
    }
}
