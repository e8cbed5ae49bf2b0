use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

pub async fn insert(
    db: &PgPool,
    user_id: i64,
    day: Date,
    workout_type: Option<&str>,
    duration_minutes: Option<i32>,
    calories_burned: f64,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO workouts (user_id, date, workout_type, duration_minutes, calories_burned)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(day)
    .bind(workout_type)
    .bind(duration_minutes)
    .bind(calories_burned)
    .fetch_one(db)
    .await
}

/// (total minutes, total kcal burned) for one day. Raw-calorie entries have
/// NULL duration and count only towards the kcal total.
pub async fn stats_for_day(
    db: &PgPool,
    user_id: i64,
    day: Date,
) -> Result<(i64, f64), sqlx::Error> {
    sqlx::query_as::<_, (i64, f64)>(
        r#"
        SELECT COALESCE(SUM(duration_minutes), 0)::BIGINT,
               COALESCE(SUM(calories_burned), 0)::DOUBLE PRECISION
        FROM workouts
        WHERE user_id = $1 AND date = $2
        "#,
    )
    .bind(user_id)
    .bind(day)
    .fetch_one(db)
    .await
}

pub async fn minutes_by_day(
    db: &PgPool,
    user_id: i64,
    from: Date,
    to: Date,
) -> Result<Vec<(Date, i64)>, sqlx::Error> {
    sqlx::query_as::<_, (Date, i64)>(
        r#"
        SELECT date, COALESCE(SUM(duration_minutes), 0)::BIGINT
        FROM workouts
        WHERE user_id = $1 AND date BETWEEN $2 AND $3
        GROUP BY date
        ORDER BY date
        "#,
    )
    .bind(user_id)
    .bind(from)
    .bind(to)
    .fetch_all(db)
    .await
}
