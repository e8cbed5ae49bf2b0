use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::NutritionConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct FoodInfo {
    pub name: String,
    pub calories_per_100g: f64,
}

/// Free-text product lookup. `Ok(None)` means the search ran but matched
/// nothing; `Err` means the call itself failed (timeout, non-2xx, bad payload).
#[async_trait]
pub trait NutritionApi: Send + Sync {
    async fn lookup(&self, query: &str) -> anyhow::Result<Option<FoodInfo>>;
}

/// OpenFoodFacts search client. The first matching product wins.
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    api_url: String,
}

impl OpenFoodFactsClient {
    pub fn new(config: &NutritionConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct Product {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    nutriments: Nutriments,
}

#[derive(Debug, Default, Deserialize)]
struct Nutriments {
    #[serde(rename = "energy-kcal_100g")]
    energy_kcal_100g: Option<f64>,
}

#[async_trait]
impl NutritionApi for OpenFoodFactsClient {
    async fn lookup(&self, query: &str) -> anyhow::Result<Option<FoodInfo>> {
        let url = format!("{}/cgi/search.pl", self.api_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("action", "process"),
                ("search_terms", query),
                ("json", "true"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        let Some(product) = body.products.into_iter().next() else {
            debug!(%query, "no products matched");
            return Ok(None);
        };

        let info = FoodInfo {
            name: product
                .product_name
                .unwrap_or_else(|| query.to_string()),
            calories_per_100g: product.nutriments.energy_kcal_100g.unwrap_or(0.0),
        };
        debug!(%query, name = %info.name, kcal = info.calories_per_100g, "product found");
        Ok(Some(info))
    }
}
