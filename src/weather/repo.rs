use sqlx::PgPool;
use time::Date;

pub async fn find_for_day(
    db: &PgPool,
    city: &str,
    day: Date,
) -> Result<Option<f64>, sqlx::Error> {
    sqlx::query_scalar::<_, f64>(
        "SELECT temperature FROM weather WHERE city = $1 AND date = $2",
    )
    .bind(city)
    .bind(day)
    .fetch_optional(db)
    .await
}

/// Idempotent on the (city, date) unique key: a concurrent insert for the
/// same city and day becomes a no-op.
pub async fn insert_if_absent(
    db: &PgPool,
    city: &str,
    day: Date,
    temperature: f64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO weather (city, date, temperature)
        VALUES ($1, $2, $3)
        ON CONFLICT (city, date) DO NOTHING
        "#,
    )
    .bind(city)
    .bind(day)
    .bind(temperature)
    .execute(db)
    .await?;
    Ok(())
}
