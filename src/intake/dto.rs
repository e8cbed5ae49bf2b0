use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct LogWaterRequest {
    pub amount_ml: f64,
}

#[derive(Debug, Serialize)]
pub struct LogWaterResponse {
    pub id: Uuid,
    pub logged_ml: f64,
    pub total_today_ml: f64,
    pub goal_ml: f64,
    pub remaining_ml: f64,
}

/// Either a raw kcal amount or a free-text product name for lookup.
#[derive(Debug, Deserialize)]
pub struct LogCaloriesRequest {
    pub calories_kcal: Option<f64>,
    pub product: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogCaloriesResponse {
    pub id: Uuid,
    /// Resolved product name when the entry came from a lookup.
    pub product: Option<String>,
    pub logged_kcal: f64,
    pub total_today_kcal: f64,
    pub goal_kcal: f64,
    pub remaining_kcal: f64,
}
