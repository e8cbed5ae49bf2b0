use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

pub async fn insert_water(
    db: &PgPool,
    user_id: i64,
    day: Date,
    amount_ml: f64,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO water_intake (user_id, date, amount_ml) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(user_id)
    .bind(day)
    .bind(amount_ml)
    .fetch_one(db)
    .await
}

pub async fn insert_calories(
    db: &PgPool,
    user_id: i64,
    day: Date,
    calories_kcal: f64,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO calorie_intake (user_id, date, calories_kcal) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(user_id)
    .bind(day)
    .bind(calories_kcal)
    .fetch_one(db)
    .await
}

pub async fn water_total_for_day(
    db: &PgPool,
    user_id: i64,
    day: Date,
) -> Result<f64, sqlx::Error> {
    sqlx::query_scalar::<_, f64>(
        "SELECT COALESCE(SUM(amount_ml), 0) FROM water_intake WHERE user_id = $1 AND date = $2",
    )
    .bind(user_id)
    .bind(day)
    .fetch_one(db)
    .await
}

pub async fn calories_total_for_day(
    db: &PgPool,
    user_id: i64,
    day: Date,
) -> Result<f64, sqlx::Error> {
    sqlx::query_scalar::<_, f64>(
        "SELECT COALESCE(SUM(calories_kcal), 0) FROM calorie_intake WHERE user_id = $1 AND date = $2",
    )
    .bind(user_id)
    .bind(day)
    .fetch_one(db)
    .await
}

pub async fn water_by_day(
    db: &PgPool,
    user_id: i64,
    from: Date,
    to: Date,
) -> Result<Vec<(Date, f64)>, sqlx::Error> {
    sqlx::query_as::<_, (Date, f64)>(
        r#"
        SELECT date, SUM(amount_ml)
        FROM water_intake
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

pub async fn calories_by_day(
    db: &PgPool,
    user_id: i64,
    from: Date,
    to: Date,
) -> Result<Vec<(Date, f64)>, sqlx::Error> {
    sqlx::query_as::<_, (Date, f64)>(
        r#"
        SELECT date, SUM(calories_kcal)
        FROM calorie_intake
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
