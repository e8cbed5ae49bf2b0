use time::{Date, Duration, OffsetDateTime};
use tracing::debug;

use crate::errors::ApiError;
use crate::goals::{self, repo::GoalSnapshot};
use crate::intake;
use crate::norms;
use crate::progress::dto::{
    DayStats, DimensionProgress, ProgressReport, WeeklyStats, WorkoutProgress,
};
use crate::state::AppState;
use crate::weather;
use crate::workouts;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTotals {
    pub water_ml: f64,
    pub calories_kcal: f64,
    pub workout_minutes: i64,
    pub calories_burned: f64,
}

/// Composes the one-day status view: today's goal (created on first request),
/// the weather-conditional water adjustment, and the consumed totals. Aside
/// from the at-most-one goal snapshot and weather record written by the
/// called components, building the report mutates nothing.
pub async fn build_report(state: &AppState, user_id: i64) -> Result<ProgressReport, ApiError> {
    let profile = crate::profile::repo::find(&state.db, user_id)
        .await?
        .ok_or(ApiError::ProfileMissing)?;

    let goal = goals::service::get_or_create_today_goal(&state.db, &profile).await?;
    let temperature = weather::service::resolve_temperature(state, &profile.city).await?;

    let today = OffsetDateTime::now_utc().date();
    let totals = DayTotals {
        water_ml: intake::repo::water_total_for_day(&state.db, user_id, today).await?,
        calories_kcal: intake::repo::calories_total_for_day(&state.db, user_id, today).await?,
        workout_minutes: 0,
        calories_burned: 0.0,
    };
    let (workout_minutes, calories_burned) =
        workouts::repo::stats_for_day(&state.db, user_id, today).await?;
    let totals = DayTotals {
        workout_minutes,
        calories_burned,
        ..totals
    };

    debug!(user_id, ?totals, "progress totals collected");
    Ok(assemble_report(today, &goal, temperature, totals))
}

fn assemble_report(
    date: Date,
    goal: &GoalSnapshot,
    temperature: Option<f64>,
    totals: DayTotals,
) -> ProgressReport {
    let additional_water_ml = weather::service::additional_water_ml(temperature);
    let water_goal = goal.water_goal_ml + additional_water_ml;

    ProgressReport {
        date,
        temperature,
        additional_water_ml,
        water: DimensionProgress {
            goal: water_goal,
            consumed: totals.water_ml,
            remaining: norms::remaining(water_goal, totals.water_ml),
        },
        calories: DimensionProgress {
            goal: goal.calorie_goal,
            consumed: totals.calories_kcal,
            remaining: norms::remaining(goal.calorie_goal, totals.calories_kcal),
        },
        workout: WorkoutProgress {
            goal_minutes: goal.workout_goal_minutes,
            active_minutes: totals.workout_minutes,
            remaining_minutes: norms::remaining(
                goal.workout_goal_minutes,
                totals.workout_minutes as f64,
            ),
            calories_burned: totals.calories_burned,
        },
    }
}

pub async fn weekly_stats(state: &AppState, user_id: i64) -> Result<WeeklyStats, ApiError> {
    if crate::profile::repo::find(&state.db, user_id).await?.is_none() {
        return Err(ApiError::ProfileMissing);
    }

    let end = OffsetDateTime::now_utc().date();
    let start = end - Duration::days(6);

    let calories = intake::repo::calories_by_day(&state.db, user_id, start, end).await?;
    let water = intake::repo::water_by_day(&state.db, user_id, start, end).await?;
    let minutes = workouts::repo::minutes_by_day(&state.db, user_id, start, end).await?;

    Ok(fill_week(start, end, &calories, &water, &minutes))
}

/// Expands sparse per-day sums into a dense 7-day series, zero for days with
/// no entries.
fn fill_week(
    start: Date,
    end: Date,
    calories: &[(Date, f64)],
    water: &[(Date, f64)],
    minutes: &[(Date, i64)],
) -> WeeklyStats {
    let lookup_f64 = |series: &[(Date, f64)], day: Date| {
        series
            .iter()
            .find(|(d, _)| *d == day)
            .map_or(0.0, |(_, v)| *v)
    };
    let lookup_i64 = |series: &[(Date, i64)], day: Date| {
        series
            .iter()
            .find(|(d, _)| *d == day)
            .map_or(0, |(_, v)| *v)
    };

    let mut days = Vec::with_capacity(7);
    let mut day = start;
    while day <= end {
        days.push(DayStats {
            date: day,
            calories_kcal: lookup_f64(calories, day),
            water_ml: lookup_f64(water, day),
            workout_minutes: lookup_i64(minutes, day),
        });
        day += Duration::days(1);
    }

    WeeklyStats {
        start_date: start,
        end_date: end,
        total_calories_kcal: days.iter().map(|d| d.calories_kcal).sum(),
        total_water_ml: days.iter().map(|d| d.water_ml).sum(),
        total_workout_minutes: days.iter().map(|d| d.workout_minutes).sum(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use uuid::Uuid;

    fn snapshot(calorie: f64, water: f64, workout: f64) -> GoalSnapshot {
        GoalSnapshot {
            id: Uuid::new_v4(),
            user_id: 42,
            date: date!(2024 - 06 - 02),
            calorie_goal: calorie,
            water_goal_ml: water,
            workout_goal_minutes: workout,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn totals(water: f64, calories: f64, minutes: i64, burned: f64) -> DayTotals {
        DayTotals {
            water_ml: water,
            calories_kcal: calories,
            workout_minutes: minutes,
            calories_burned: burned,
        }
    }

    #[test]
    fn remaining_is_goal_minus_consumed() {
        let report = assemble_report(
            date!(2024 - 06 - 02),
            &snapshot(1780.0, 2400.0, 60.0),
            None,
            totals(800.0, 500.0, 10, 120.0),
        );
        assert_eq!(report.additional_water_ml, 0.0);
        assert_eq!(report.water.goal, 2400.0);
        assert_eq!(report.water.remaining, 1600.0);
        assert_eq!(report.calories.remaining, 1280.0);
        assert_eq!(report.workout.remaining_minutes, 50.0);
        assert_eq!(report.workout.calories_burned, 120.0);
    }

    #[test]
    fn overconsumption_clamps_remaining_to_zero() {
        let report = assemble_report(
            date!(2024 - 06 - 02),
            &snapshot(1780.0, 2400.0, 21.43),
            None,
            totals(3000.0, 2500.0, 60, 0.0),
        );
        assert_eq!(report.water.remaining, 0.0);
        assert_eq!(report.calories.remaining, 0.0);
        assert_eq!(report.workout.remaining_minutes, 0.0);
    }

    #[test]
    fn hot_day_raises_the_water_goal_only() {
        let report = assemble_report(
            date!(2024 - 06 - 02),
            &snapshot(1780.0, 2400.0, 21.43),
            Some(29.0),
            totals(0.0, 0.0, 0, 0.0),
        );
        assert_eq!(report.additional_water_ml, 500.0);
        assert_eq!(report.water.goal, 2900.0);
        assert_eq!(report.water.remaining, 2900.0);
        assert_eq!(report.calories.goal, 1780.0);
    }

    #[test]
    fn borderline_temperature_does_not_adjust() {
        let report = assemble_report(
            date!(2024 - 06 - 02),
            &snapshot(1780.0, 2400.0, 21.43),
            Some(25.0),
            totals(0.0, 0.0, 0, 0.0),
        );
        assert_eq!(report.additional_water_ml, 0.0);
        assert_eq!(report.water.goal, 2400.0);
    }

    #[test]
    fn fill_week_zero_fills_missing_days() {
        let start = date!(2024 - 06 - 01);
        let end = date!(2024 - 06 - 07);
        let calories = vec![(date!(2024 - 06 - 02), 900.0), (date!(2024 - 06 - 05), 400.0)];
        let water = vec![(date!(2024 - 06 - 02), 1500.0)];
        let minutes = vec![(date!(2024 - 06 - 07), 30)];

        let stats = fill_week(start, end, &calories, &water, &minutes);
        assert_eq!(stats.days.len(), 7);
        assert_eq!(stats.days[0].calories_kcal, 0.0);
        assert_eq!(stats.days[1].calories_kcal, 900.0);
        assert_eq!(stats.days[1].water_ml, 1500.0);
        assert_eq!(stats.days[6].workout_minutes, 30);
        assert_eq!(stats.total_calories_kcal, 1300.0);
        assert_eq!(stats.total_water_ml, 1500.0);
        assert_eq!(stats.total_workout_minutes, 30);
    }
}
