use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::WeatherConfig;

/// Current-temperature lookup for a city. Any transport or payload problem is
/// a plain error; the caller decides whether that is fatal.
#[async_trait]
pub trait WeatherApi: Send + Sync {
    async fn fetch_temperature(&self, city: &str) -> anyhow::Result<f64>;
}

/// weatherstack `current` endpoint client.
pub struct WeatherstackClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl WeatherstackClient {
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct WeatherstackResponse {
    current: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
}

#[async_trait]
impl WeatherApi for WeatherstackClient {
    async fn fetch_temperature(&self, city: &str) -> anyhow::Result<f64> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[("access_key", self.api_key.as_str()), ("query", city)])
            .send()
            .await?
            .error_for_status()?;

        let body: WeatherstackResponse = response.json().await?;
        // weatherstack reports API errors as 200 with an error body and no
        // `current` block.
        match body.current {
            Some(current) => {
                debug!(%city, temperature = current.temperature, "weather fetched");
                Ok(current.temperature)
            }
            None => anyhow::bail!("weather response has no current block for {city}"),
        }
    }
}
