use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    pub api_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NutritionConfig {
    pub api_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub weather: WeatherConfig,
    pub nutrition: NutritionConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let weather = WeatherConfig {
            api_url: std::env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| "http://api.weatherstack.com/current".into()),
            api_key: std::env::var("WEATHER_API_KEY").unwrap_or_default(),
        };
        let nutrition = NutritionConfig {
            api_url: std::env::var("NUTRITION_API_URL")
                .unwrap_or_else(|_| "https://world.openfoodfacts.org".into()),
            timeout_secs: std::env::var("NUTRITION_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(10),
        };
        Ok(Self {
            database_url,
            weather,
            nutrition,
        })
    }
}
