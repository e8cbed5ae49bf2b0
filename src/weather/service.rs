use async_trait::async_trait;
use sqlx::PgPool;
use time::{Date, OffsetDateTime};
use tracing::{debug, warn};

use crate::clients::weather::WeatherApi;
use crate::errors::ApiError;
use crate::state::AppState;
use crate::weather::repo;

pub const TEMPERATURE_THRESHOLD_C: f64 = 25.0;
pub const HOT_DAY_EXTRA_WATER_ML: f64 = 500.0;

/// Storage seam for the per-city per-day temperature cache.
#[async_trait]
pub trait WeatherStore: Send + Sync {
    async fn find_for_day(&self, city: &str, day: Date) -> Result<Option<f64>, sqlx::Error>;
    async fn insert_if_absent(
        &self,
        city: &str,
        day: Date,
        temperature: f64,
    ) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl WeatherStore for PgPool {
    async fn find_for_day(&self, city: &str, day: Date) -> Result<Option<f64>, sqlx::Error> {
        repo::find_for_day(self, city, day).await
    }

    async fn insert_if_absent(
        &self,
        city: &str,
        day: Date,
        temperature: f64,
    ) -> Result<(), sqlx::Error> {
        repo::insert_if_absent(self, city, day, temperature).await
    }
}

/// Cached-or-fetched current temperature for a city. The cache is scoped to
/// (city, day) and shared across users; a failed fetch is absorbed into
/// `None` and leaves the cache empty so the next caller retries.
pub async fn resolve_temperature(
    state: &AppState,
    city: &str,
) -> Result<Option<f64>, ApiError> {
    let today = OffsetDateTime::now_utc().date();
    resolve_with(&state.db, state.weather.as_ref(), city, today).await
}

pub(crate) async fn resolve_with(
    store: &impl WeatherStore,
    api: &dyn WeatherApi,
    city: &str,
    today: Date,
) -> Result<Option<f64>, ApiError> {
    if let Some(temperature) = store.find_for_day(city, today).await? {
        debug!(%city, temperature, "weather cache hit");
        return Ok(Some(temperature));
    }

    match api.fetch_temperature(city).await {
        Ok(temperature) => {
            store.insert_if_absent(city, today, temperature).await?;
            Ok(Some(temperature))
        }
        Err(e) => {
            warn!(error = %e, %city, "weather fetch failed, no water adjustment today");
            Ok(None)
        }
    }
}

/// Fixed hot-day rule: strictly above 25 °C adds 500 ml to the water goal.
/// An unknown temperature adjusts nothing.
pub fn additional_water_ml(temperature: Option<f64>) -> f64 {
    match temperature {
        Some(t) if t > TEMPERATURE_THRESHOLD_C => HOT_DAY_EXTRA_WATER_ML,
        _ => 0.0,
    }
}
