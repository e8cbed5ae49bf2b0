use serde::Serialize;
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionProgress {
    pub goal: f64,
    pub consumed: f64,
    pub remaining: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutProgress {
    pub goal_minutes: f64,
    pub active_minutes: i64,
    pub remaining_minutes: f64,
    pub calories_burned: f64,
}

/// One-day status snapshot: goals (water already weather-adjusted), consumed
/// totals, and what is left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub date: Date,
    pub temperature: Option<f64>,
    pub additional_water_ml: f64,
    pub water: DimensionProgress,
    pub calories: DimensionProgress,
    pub workout: WorkoutProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayStats {
    pub date: Date,
    pub calories_kcal: f64,
    pub water_ml: f64,
    pub workout_minutes: i64,
}

/// Last-7-days series (today and the six days before), missing days
/// zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyStats {
    pub start_date: Date,
    pub end_date: Date,
    pub days: Vec<DayStats>,
    pub total_calories_kcal: f64,
    pub total_water_ml: f64,
    pub total_workout_minutes: i64,
}
