use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Two logging modes: a typed workout (`workout_type` + `duration_minutes`,
/// calories derived from MET and body weight) or a raw `calories_burned`
/// figure with no type or duration.
#[derive(Debug, Deserialize)]
pub struct LogWorkoutRequest {
    pub workout_type: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct LogWorkoutResponse {
    pub id: Uuid,
    pub workout_type: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: f64,
    /// Post-workout hydration suggestion, surfaced only — never persisted.
    pub water_suggestion_ml: f64,
}
