use async_trait::async_trait;
use sqlx::PgPool;
use time::{Date, OffsetDateTime};
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::goals::repo::{self, GoalSnapshot};
use crate::norms;
use crate::profile::repo::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTargets {
    pub calorie_goal: f64,
    pub water_goal_ml: f64,
    pub workout_goal_minutes: f64,
}

/// Storage seam for the append-only goal snapshot ledger.
#[async_trait]
pub trait GoalStore: Send + Sync {
    async fn find_for_day(
        &self,
        user_id: i64,
        day: Date,
    ) -> Result<Option<GoalSnapshot>, sqlx::Error>;
    async fn insert(
        &self,
        user_id: i64,
        day: Date,
        targets: &ResolvedTargets,
    ) -> Result<GoalSnapshot, sqlx::Error>;
}

#[async_trait]
impl GoalStore for PgPool {
    async fn find_for_day(
        &self,
        user_id: i64,
        day: Date,
    ) -> Result<Option<GoalSnapshot>, sqlx::Error> {
        repo::find_for_day(self, user_id, day).await
    }

    async fn insert(
        &self,
        user_id: i64,
        day: Date,
        targets: &ResolvedTargets,
    ) -> Result<GoalSnapshot, sqlx::Error> {
        repo::insert(self, user_id, day, targets).await
    }
}

/// Per-dimension target resolution: a positive profile preference wins
/// verbatim, otherwise the computed norm for that dimension is used.
pub fn resolve_targets(profile: &UserProfile, today: Date) -> ResolvedTargets {
    let age = norms::age_on(profile.birth_date, today);
    let computed = norms::calculate_norms(profile.height, profile.weight, age);

    ResolvedTargets {
        calorie_goal: if profile.preferred_calories_kcal > 0 {
            f64::from(profile.preferred_calories_kcal)
        } else {
            computed.calorie_goal
        },
        water_goal_ml: if profile.preferred_water_ml > 0 {
            f64::from(profile.preferred_water_ml)
        } else {
            computed.water_goal_ml
        },
        workout_goal_minutes: if profile.preferred_workout_minutes > 0 {
            f64::from(profile.preferred_workout_minutes)
        } else {
            computed.daily_activity_minutes
        },
    }
}

pub async fn get_or_create_today_goal(
    db: &PgPool,
    profile: &UserProfile,
) -> Result<GoalSnapshot, ApiError> {
    get_or_create_goal_for_day(db, profile, OffsetDateTime::now_utc().date()).await
}

/// Load-or-create-once-per-calendar-day. Once a snapshot exists for the day
/// its stored numbers are authoritative for the rest of the day, even if the
/// profile preferences change in the meantime. That is policy, not an
/// oversight. Duplicate same-day rows (benign insert race) are tolerated by
/// always reading the most recent one.
pub(crate) async fn get_or_create_goal_for_day(
    store: &impl GoalStore,
    profile: &UserProfile,
    today: Date,
) -> Result<GoalSnapshot, ApiError> {
    if let Some(existing) = store.find_for_day(profile.id, today).await? {
        debug!(user_id = profile.id, %today, "reusing today's goal snapshot");
        return Ok(existing);
    }

    let targets = resolve_targets(profile, today);
    let snapshot = store.insert(profile.id, today, &targets).await?;
    info!(
        user_id = profile.id,
        %today,
        calorie_goal = snapshot.calorie_goal,
        water_goal_ml = snapshot.water_goal_ml,
        workout_goal_minutes = snapshot.workout_goal_minutes,
        "goal snapshot created"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::repo::Gender;
    use std::sync::Mutex;
    use time::macros::date;
    use uuid::Uuid;

    fn profile_with_preferences(water: i32, calories: i32, workout: i32) -> UserProfile {
        UserProfile {
            id: 42,
            name: "Pavel".into(),
            birth_date: date!(1994 - 03 - 15),
            city: "Lisbon".into(),
            height: 180.0,
            weight: 80.0,
            gender: Gender::Male,
            preferred_water_ml: water,
            preferred_calories_kcal: calories,
            preferred_workout_minutes: workout,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[derive(Default)]
    struct MemoryLedger {
        rows: Mutex<Vec<GoalSnapshot>>,
    }

    #[async_trait]
    impl GoalStore for MemoryLedger {
        async fn find_for_day(
            &self,
            user_id: i64,
            day: Date,
        ) -> Result<Option<GoalSnapshot>, sqlx::Error> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.user_id == user_id && s.date == day)
                .max_by_key(|s| s.created_at)
                .cloned())
        }

        async fn insert(
            &self,
            user_id: i64,
            day: Date,
            targets: &ResolvedTargets,
        ) -> Result<GoalSnapshot, sqlx::Error> {
            let snapshot = GoalSnapshot {
                id: Uuid::new_v4(),
                user_id,
                date: day,
                calorie_goal: targets.calorie_goal,
                water_goal_ml: targets.water_goal_ml,
                workout_goal_minutes: targets.workout_goal_minutes,
                created_at: OffsetDateTime::now_utc(),
            };
            self.rows.lock().unwrap().push(snapshot.clone());
            Ok(snapshot)
        }
    }

    #[test]
    fn zero_preferences_fall_back_to_computed_norms() {
        // age 30 on this date
        let targets = resolve_targets(&profile_with_preferences(0, 0, 0), date!(2024 - 06 - 02));
        assert_eq!(targets.calorie_goal, 1780.0);
        assert_eq!(targets.water_goal_ml, 2400.0);
        assert_eq!(targets.workout_goal_minutes, 21.43);
    }

    #[test]
    fn positive_preferences_override_verbatim() {
        let targets =
            resolve_targets(&profile_with_preferences(3000, 2200, 45), date!(2024 - 06 - 02));
        assert_eq!(targets.water_goal_ml, 3000.0);
        assert_eq!(targets.calorie_goal, 2200.0);
        assert_eq!(targets.workout_goal_minutes, 45.0);
    }

    #[test]
    fn dimensions_resolve_independently() {
        let targets =
            resolve_targets(&profile_with_preferences(3000, 0, 0), date!(2024 - 06 - 02));
        assert_eq!(targets.water_goal_ml, 3000.0);
        assert_eq!(targets.calorie_goal, 1780.0);
        assert_eq!(targets.workout_goal_minutes, 21.43);
    }

    #[tokio::test]
    async fn same_day_calls_reuse_the_first_snapshot() {
        let ledger = MemoryLedger::default();
        let today = date!(2024 - 06 - 02);
        let profile = profile_with_preferences(0, 0, 0);

        let first = get_or_create_goal_for_day(&ledger, &profile, today)
            .await
            .unwrap();
        assert_eq!(first.calorie_goal, 1780.0);

        // Intra-day preference edits must not touch the stored snapshot.
        let mut edited = profile.clone();
        edited.preferred_water_ml = 3000;
        edited.preferred_calories_kcal = 2200;
        let second = get_or_create_goal_for_day(&ledger, &edited, today)
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.calorie_goal, 1780.0);
        assert_eq!(second.water_goal_ml, 2400.0);
        assert_eq!(ledger.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn a_new_day_resolves_afresh() {
        let ledger = MemoryLedger::default();
        let profile = profile_with_preferences(0, 0, 0);

        get_or_create_goal_for_day(&ledger, &profile, date!(2024 - 06 - 02))
            .await
            .unwrap();

        let mut edited = profile.clone();
        edited.preferred_water_ml = 3000;
        let next_day = get_or_create_goal_for_day(&ledger, &edited, date!(2024 - 06 - 03))
            .await
            .unwrap();

        assert_eq!(next_day.water_goal_ml, 3000.0);
        assert_eq!(ledger.rows.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn duplicate_rows_resolve_to_the_most_recent() {
        let ledger = MemoryLedger::default();
        let today = date!(2024 - 06 - 02);
        let older = ResolvedTargets {
            calorie_goal: 1700.0,
            water_goal_ml: 2300.0,
            workout_goal_minutes: 20.0,
        };
        let newer = ResolvedTargets {
            calorie_goal: 1800.0,
            water_goal_ml: 2500.0,
            workout_goal_minutes: 30.0,
        };
        ledger.insert(42, today, &older).await.unwrap();
        ledger.insert(42, today, &newer).await.unwrap();

        let resolved = get_or_create_goal_for_day(&ledger, &profile_with_preferences(0, 0, 0), today)
            .await
            .unwrap();
        assert_eq!(resolved.water_goal_ml, 2500.0);
        assert_eq!(ledger.rows.lock().unwrap().len(), 2);
    }
}
