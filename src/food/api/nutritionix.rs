use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

use crate::error::{CarbError, ServiceError};
use crate::food::api::traits::NutritionLookup;
use crate::food::config::NutritionixConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommonFood {
    pub food_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodNutrients {
    pub food_name: String,
    pub nf_total_carbohydrate: Option<f64>,
    pub serving_weight_grams: Option<f64>,
    pub serving_qty: f64,
    pub serving_unit: String,
}

#[derive(Debug, Deserialize)]
struct InstantSearchResponse {
    common: Vec<CommonFood>,
}

#[derive(Debug, Deserialize)]
struct NaturalNutrientsResponse {
    foods: Vec<FoodNutrients>,
}

#[derive(Debug, Clone)]
pub struct NutritionixClient {
    config: NutritionixConfig,
    client: Client,
    search_url: Url,
    nutrients_url: Url,
}

impl NutritionixClient {
    pub fn new(config: NutritionixConfig) -> Result<Self, CarbError> {
        let search_url = config.endpoint("search/instant")?;
        let nutrients_url = config.endpoint("natural/nutrients")?;

        Ok(Self {
            config,
            client: Client::new(),
            search_url,
            nutrients_url,
        })
    }

    async fn post<T: DeserializeOwned>(&self, url: &Url, body: Value) -> Result<T, ServiceError> {
        tracing::debug!(%url, "POST nutritionix");

        let response = self
            .client
            .post(url.clone())
            .header("x-app-id", &self.config.app_id)
            .header("x-app-key", &self.config.app_key)
            .header("x-remote-user-id", &self.config.remote_user_id)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Prefer the service's JSON error body, fall back to the raw text
            let payload = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(ServiceError::Status { status, payload });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl NutritionLookup for NutritionixClient {
    async fn search_instant(&self, query: &str) -> Result<Vec<CommonFood>, ServiceError> {
        let response: InstantSearchResponse = self
            .post(&self.search_url, json!({ "query": query, "detailed": true }))
            .await?;
        Ok(response.common)
    }

    async fn natural_nutrients(&self, query: &str) -> Result<Vec<FoodNutrients>, ServiceError> {
        let response: NaturalNutrientsResponse = self
            .post(&self.nutrients_url, json!({ "query": query }))
            .await?;
        Ok(response.foods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrients_response_tolerates_null_values() {
        let body = r#"{"foods":[{"food_name":"apple","nf_total_carbohydrate":null,
            "serving_weight_grams":null,"serving_qty":1,"serving_unit":"medium (3\" dia)",
            "nf_calories":95}]}"#;
        let parsed: NaturalNutrientsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.foods.len(), 1);
        assert_eq!(parsed.foods[0].nf_total_carbohydrate, None);
        assert_eq!(parsed.foods[0].serving_weight_grams, None);
    }

    #[test]
    fn test_search_response_requires_common_list() {
        let parsed = serde_json::from_str::<InstantSearchResponse>(r#"{"branded":[]}"#);
        assert!(parsed.is_err());
    }
}
