use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};

use crate::profile::dto::UpsertProfileRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "gender", rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// One row of `users`. Preferences of 0 mean "use the computed default";
/// positive values override the matching computed target verbatim.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub birth_date: Date,
    pub city: String,
    pub height: f64,
    pub weight: f64,
    pub gender: Gender,
    pub preferred_water_ml: i32,
    pub preferred_calories_kcal: i32,
    pub preferred_workout_minutes: i32,
    pub created_at: OffsetDateTime,
}

const PROFILE_COLUMNS: &str = "id, name, birth_date, city, height, weight, gender, \
     preferred_water_ml, preferred_calories_kcal, preferred_workout_minutes, created_at";

pub async fn find(db: &PgPool, user_id: i64) -> Result<Option<UserProfile>, sqlx::Error> {
    let profile = sqlx::query_as::<_, UserProfile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(profile)
}

pub async fn upsert(
    db: &PgPool,
    user_id: i64,
    req: &UpsertProfileRequest,
) -> Result<UserProfile, sqlx::Error> {
    let profile = sqlx::query_as::<_, UserProfile>(&format!(
        r#"
        INSERT INTO users (id, name, birth_date, city, height, weight, gender,
                           preferred_water_ml, preferred_calories_kcal, preferred_workout_minutes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (id) DO UPDATE SET
            name = excluded.name,
            birth_date = excluded.birth_date,
            city = excluded.city,
            height = excluded.height,
            weight = excluded.weight,
            gender = excluded.gender,
            preferred_water_ml = excluded.preferred_water_ml,
            preferred_calories_kcal = excluded.preferred_calories_kcal,
            preferred_workout_minutes = excluded.preferred_workout_minutes
        RETURNING {PROFILE_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(&req.name)
    .bind(req.birth_date)
    .bind(&req.city)
    .bind(req.height)
    .bind(req.weight)
    .bind(req.gender)
    .bind(req.preferred_water_ml)
    .bind(req.preferred_calories_kcal)
    .bind(req.preferred_workout_minutes)
    .fetch_one(db)
    .await?;
    Ok(profile)
}
