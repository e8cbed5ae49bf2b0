use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::goals::service::ResolvedTargets;

/// Append-only daily goal record. The authoritative snapshot for a day is the
/// most recently created row with that day's date.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GoalSnapshot {
    pub id: Uuid,
    pub user_id: i64,
    pub date: Date,
    pub calorie_goal: f64,
    pub water_goal_ml: f64,
    pub workout_goal_minutes: f64,
    pub created_at: OffsetDateTime,
}

pub async fn find_for_day(
    db: &PgPool,
    user_id: i64,
    day: Date,
) -> Result<Option<GoalSnapshot>, sqlx::Error> {
    let snapshot = sqlx::query_as::<_, GoalSnapshot>(
        r#"
        SELECT id, user_id, date, calorie_goal, water_goal_ml, workout_goal_minutes, created_at
        FROM goal_snapshots
        WHERE user_id = $1 AND date = $2
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .bind(day)
    .fetch_optional(db)
    .await?;
    Ok(snapshot)
}

pub async fn insert(
    db: &PgPool,
    user_id: i64,
    day: Date,
    targets: &ResolvedTargets,
) -> Result<GoalSnapshot, sqlx::Error> {
    let snapshot = sqlx::query_as::<_, GoalSnapshot>(
        r#"
        INSERT INTO goal_snapshots (user_id, date, calorie_goal, water_goal_ml, workout_goal_minutes)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, date, calorie_goal, water_goal_ml, workout_goal_minutes, created_at
        "#,
    )
    .bind(user_id)
    .bind(day)
    .bind(targets.calorie_goal)
    .bind(targets.water_goal_ml)
    .bind(targets.workout_goal_minutes)
    .fetch_one(db)
    .await?;
    Ok(snapshot)
}
