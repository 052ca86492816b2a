use std::env;
use url::Url;

use crate::error::CarbError;

const DEFAULT_API_URL: &str = "https://trackapi.nutritionix.com/v2";
// 0 is the development user id
const DEFAULT_REMOTE_USER_ID: &str = "0";

/// Credentials and endpoint for the Nutritionix API. Loaded once at startup.
#[derive(Debug, Clone)]
pub struct NutritionixConfig {
    pub app_id: String,
    pub app_key: String,
    pub remote_user_id: String,
    pub base_url: Url,
}

impl NutritionixConfig {
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, CarbError> {
        Ok(Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            remote_user_id: DEFAULT_REMOTE_USER_ID.to_string(),
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn from_env() -> Result<Self, CarbError> {
        // Missing credentials are not fatal here, the service rejects them instead
        let app_id = env::var("NUTRITIONIX_API_ID").unwrap_or_else(|_| {
            tracing::warn!("NUTRITIONIX_API_ID environment variable not set");
            String::new()
        });
        let app_key = env::var("NUTRITIONIX_API_KEY").unwrap_or_else(|_| {
            tracing::warn!("NUTRITIONIX_API_KEY environment variable not set");
            String::new()
        });

        let remote_user_id = env::var("NUTRITIONIX_REMOTE_USER_ID")
            .unwrap_or_else(|_| DEFAULT_REMOTE_USER_ID.to_string());

        let base_url = env::var("NUTRITIONIX_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self {
            app_id,
            app_key,
            remote_user_id,
            base_url: parse_base_url(&base_url)?,
        })
    }

    /// Resolve an endpoint path (e.g. `search/instant`) against the base url.
    pub fn endpoint(&self, path: &str) -> Result<Url, CarbError> {
        self.base_url
            .join(path)
            .map_err(|e| CarbError::Config(format!("Invalid endpoint '{}': {}", path, e)))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, CarbError> {
    // Url::join drops the last segment unless the base ends in '/'
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized)
        .map_err(|e| CarbError::Config(format!("Invalid NUTRITIONIX_API_URL '{}': {}", raw, e)))
}
