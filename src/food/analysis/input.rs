use validator::Validate;

use crate::error::CarbError;

const MISSING_INPUT: &str = "Please provide both a food item and weight in grams";

/// A validated food query and the weight to scale it to.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub food_name: String,
    pub weight_grams: f64,
}

// Arguments as typed, before the weight is parsed
#[derive(Debug, Validate)]
struct RawLookup {
    #[validate(length(min = 1))]
    food_name: String,
    #[validate(length(min = 1))]
    weight: String,
}

impl LookupRequest {
    pub fn parse(food_name: Option<&str>, weight_raw: Option<&str>) -> Result<Self, CarbError> {
        let raw = RawLookup {
            food_name: food_name.unwrap_or_default().to_string(),
            weight: weight_raw.unwrap_or_default().trim().to_string(),
        };
        raw.validate()
            .map_err(|_| CarbError::InvalidInput(MISSING_INPUT.to_string()))?;

        let weight_grams = raw
            .weight
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| CarbError::InvalidInput("Weight must be a valid number".to_string()))?;

        Ok(Self {
            food_name: raw.food_name,
            weight_grams,
        })
    }
}
