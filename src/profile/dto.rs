use serde::Deserialize;
use time::Date;

use crate::profile::repo::Gender;

#[derive(Debug, Deserialize)]
pub struct UpsertProfileRequest {
    pub name: String,
    pub birth_date: Date,
    pub city: String,
    pub height: f64,
    pub weight: f64,
    pub gender: Gender,
    #[serde(default)]
    pub preferred_water_ml: i32,
    #[serde(default)]
    pub preferred_calories_kcal: i32,
    #[serde(default)]
    pub preferred_workout_minutes: i32,
}
