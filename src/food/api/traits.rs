use async_trait::async_trait;

use crate::error::ServiceError;
use crate::food::api::nutritionix::{CommonFood, FoodNutrients};

/// The two request shapes the estimator needs from a nutrition database.
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    /// Common (non-branded) matches for a free-text query, in service order.
    async fn search_instant(&self, query: &str) -> Result<Vec<CommonFood>, ServiceError>;

    /// Natural-language nutrient breakdown for a query.
    async fn natural_nutrients(&self, query: &str) -> Result<Vec<FoodNutrients>, ServiceError>;
}
