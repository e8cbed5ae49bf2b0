use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::profile;
use crate::state::AppState;
use crate::workouts::dto::{LogWorkoutRequest, LogWorkoutResponse};
use crate::workouts::repo;

/// Suggested hydration per minute of a timed workout.
pub const WATER_PER_WORKOUT_MINUTE_ML: f64 = 10.0;

/// Closed activity set with fixed metabolic-equivalent factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutType {
    Running,
    Yoga,
    Strength,
    Cycling,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 4] = [
        WorkoutType::Running,
        WorkoutType::Yoga,
        WorkoutType::Strength,
        WorkoutType::Cycling,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "running" => Some(Self::Running),
            "yoga" => Some(Self::Yoga),
            "strength" => Some(Self::Strength),
            "cycling" => Some(Self::Cycling),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Yoga => "yoga",
            Self::Strength => "strength",
            Self::Cycling => "cycling",
        }
    }

    pub fn met(self) -> f64 {
        match self {
            Self::Running => 9.8,
            Self::Yoga => 2.5,
            Self::Strength => 6.0,
            Self::Cycling => 8.0,
        }
    }
}

/// A validated logging request: a typed workout, or a raw kcal figure.
#[derive(Debug, Clone, Copy, PartialEq)]
enum WorkoutEntry {
    Timed {
        workout: WorkoutType,
        duration_minutes: i32,
    },
    Raw {
        calories_burned: f64,
    },
}

pub fn calories_burned(weight_kg: f64, workout: WorkoutType, duration_minutes: i32) -> f64 {
    weight_kg * workout.met() * (f64::from(duration_minutes) / 60.0)
}

pub async fn log_workout(
    state: &AppState,
    user_id: i64,
    req: LogWorkoutRequest,
) -> Result<LogWorkoutResponse, ApiError> {
    let today = OffsetDateTime::now_utc().date();

    match parse_request(req)? {
        WorkoutEntry::Raw {
            calories_burned: kcal,
        } => {
            let id = repo::insert(&state.db, user_id, today, None, None, kcal).await?;
            info!(user_id, kcal, "raw workout logged");
            Ok(raw_response(id, kcal))
        }
        WorkoutEntry::Timed {
            workout,
            duration_minutes,
        } => {
            let profile = profile::repo::find(&state.db, user_id)
                .await?
                .ok_or(ApiError::ProfileMissing)?;
            let kcal = calories_burned(profile.weight, workout, duration_minutes);

            let id = repo::insert(
                &state.db,
                user_id,
                today,
                Some(workout.as_str()),
                Some(duration_minutes),
                kcal,
            )
            .await?;
            info!(
                user_id,
                workout_type = workout.as_str(),
                duration_minutes,
                kcal,
                "workout logged"
            );
            Ok(timed_response(id, workout, duration_minutes, kcal))
        }
    }
}

fn parse_request(req: LogWorkoutRequest) -> Result<WorkoutEntry, ApiError> {
    match (req.workout_type, req.duration_minutes, req.calories_burned) {
        // Raw mode: only the burned calories are known.
        (None, None, Some(kcal)) => {
            if !(kcal > 0.0) {
                return Err(ApiError::validation("calories_burned must be positive"));
            }
            Ok(WorkoutEntry::Raw {
                calories_burned: kcal,
            })
        }
        (Some(type_name), Some(duration), None) => {
            let workout = WorkoutType::parse(&type_name).ok_or_else(|| {
                let allowed = WorkoutType::ALL.map(WorkoutType::as_str).join(", ");
                ApiError::Validation(format!(
                    "unknown workout type '{type_name}', expected one of: {allowed}"
                ))
            })?;
            if duration <= 0 {
                return Err(ApiError::validation("duration_minutes must be positive"));
            }
            Ok(WorkoutEntry::Timed {
                workout,
                duration_minutes: duration,
            })
        }
        _ => Err(ApiError::validation(
            "log either workout_type with duration_minutes, or calories_burned alone",
        )),
    }
}

fn raw_response(id: Uuid, calories_burned: f64) -> LogWorkoutResponse {
    LogWorkoutResponse {
        id,
        workout_type: None,
        duration_minutes: None,
        calories_burned,
        water_suggestion_ml: 0.0,
    }
}

fn timed_response(
    id: Uuid,
    workout: WorkoutType,
    duration_minutes: i32,
    calories_burned: f64,
) -> LogWorkoutResponse {
    LogWorkoutResponse {
        id,
        workout_type: Some(workout.as_str().to_string()),
        duration_minutes: Some(duration_minutes),
        calories_burned,
        water_suggestion_ml: f64::from(duration_minutes) * WATER_PER_WORKOUT_MINUTE_ML,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        workout_type: Option<&str>,
        duration_minutes: Option<i32>,
        calories_burned: Option<f64>,
    ) -> LogWorkoutRequest {
        LogWorkoutRequest {
            workout_type: workout_type.map(str::to_string),
            duration_minutes,
            calories_burned,
        }
    }

    #[test]
    fn met_derivation_matches_formula() {
        // 80 kg, 30 min run: 80 * 9.8 * 0.5
        assert_eq!(calories_burned(80.0, WorkoutType::Running, 30), 392.0);
        assert_eq!(calories_burned(60.0, WorkoutType::Yoga, 60), 150.0);
        assert_eq!(calories_burned(70.0, WorkoutType::Strength, 45), 315.0);
    }

    #[test]
    fn parse_is_case_insensitive_and_closed() {
        assert_eq!(WorkoutType::parse("Running"), Some(WorkoutType::Running));
        assert_eq!(WorkoutType::parse("CYCLING"), Some(WorkoutType::Cycling));
        assert_eq!(WorkoutType::parse("swimming"), None);
        assert_eq!(WorkoutType::parse(""), None);
    }

    #[test]
    fn valid_modes_parse() {
        assert_eq!(
            parse_request(request(Some("yoga"), Some(45), None)).unwrap(),
            WorkoutEntry::Timed {
                workout: WorkoutType::Yoga,
                duration_minutes: 45
            }
        );
        assert_eq!(
            parse_request(request(None, None, Some(250.0))).unwrap(),
            WorkoutEntry::Raw {
                calories_burned: 250.0
            }
        );
    }

    #[test]
    fn invalid_requests_are_rejected_before_persistence() {
        // unknown type
        assert!(parse_request(request(Some("swimming"), Some(30), None)).is_err());
        // non-positive duration / calories
        assert!(parse_request(request(Some("running"), Some(0), None)).is_err());
        assert!(parse_request(request(None, None, Some(-10.0))).is_err());
        // mixed or empty modes
        assert!(parse_request(request(Some("running"), Some(30), Some(100.0))).is_err());
        assert!(parse_request(request(Some("running"), None, None)).is_err());
        assert!(parse_request(request(None, None, None)).is_err());
    }

    #[test]
    fn timed_response_suggests_ten_ml_per_minute() {
        let id = Uuid::new_v4();
        let response = timed_response(id, WorkoutType::Running, 45, 392.0);
        assert_eq!(response.water_suggestion_ml, 450.0);
        assert_eq!(response.workout_type.as_deref(), Some("running"));
        assert_eq!(response.duration_minutes, Some(45));
        assert_eq!(response.calories_burned, 392.0);
    }

    #[test]
    fn raw_response_suggests_no_water() {
        let response = raw_response(Uuid::new_v4(), 250.0);
        assert_eq!(response.water_suggestion_ml, 0.0);
        assert_eq!(response.workout_type, None);
        assert_eq!(response.duration_minutes, None);
    }
}
