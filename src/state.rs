use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::clients::nutrition::{NutritionApi, OpenFoodFactsClient};
use crate::clients::weather::{WeatherApi, WeatherstackClient};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub weather: Arc<dyn WeatherApi>,
    pub nutrition: Arc<dyn NutritionApi>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let weather =
            Arc::new(WeatherstackClient::new(&config.weather)?) as Arc<dyn WeatherApi>;
        let nutrition =
            Arc::new(OpenFoodFactsClient::new(&config.nutrition)?) as Arc<dyn NutritionApi>;

        Ok(Self::from_parts(db, config, weather, nutrition))
    }

    pub fn from_parts(
        db: PgPool,
        config: Arc<AppConfig>,
        weather: Arc<dyn WeatherApi>,
        nutrition: Arc<dyn NutritionApi>,
    ) -> Self {
        Self {
            db,
            config,
            weather,
            nutrition,
        }
    }
}
