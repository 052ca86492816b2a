use serde::{Deserialize, Serialize};

use crate::food::api::FoodNutrients;

pub const CANNOT_CALCULATE: &str = "Cannot calculate";
pub const UNKNOWN: &str = "Unknown";

/// Nutrient facts for one serving of a candidate food.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientDetail {
    pub food_name: String,
    pub total_carbohydrate_grams: f64,
    pub serving_weight_grams: Option<f64>,
    pub serving_qty: f64,
    pub serving_unit: String,
}

impl NutrientDetail {
    /// Build from a service record, keeping the name the candidate was searched under.
    pub fn from_record(food_name: &str, record: FoodNutrients) -> Self {
        Self {
            food_name: food_name.to_string(),
            total_carbohydrate_grams: record.nf_total_carbohydrate.unwrap_or(0.0),
            serving_weight_grams: record.serving_weight_grams,
            serving_qty: record.serving_qty,
            serving_unit: record.serving_unit,
        }
    }

    pub fn carbs_per_100g(&self) -> Option<f64> {
        match self.serving_weight_grams {
            Some(weight) if weight > 0.0 => Some(self.total_carbohydrate_grams * 100.0 / weight),
            _ => None,
        }
    }

    pub fn carbs_for_weight(&self, weight_grams: f64) -> Option<f64> {
        self.carbs_per_100g().map(|per_100g| per_100g * weight_grams / 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub food_name: String,
    pub carbs_in_provided_weight: String,
    pub requested_weight: String,
    pub carbs_per_100g: String,
    pub original_serving: String,
}

impl ReportRow {
    pub fn build(detail: &NutrientDetail, weight_grams: f64) -> Self {
        let serving_weight = detail
            .serving_weight_grams
            .map(plain_number)
            .unwrap_or_else(|| "?".to_string());

        Self {
            food_name: detail.food_name.clone(),
            carbs_in_provided_weight: detail
                .carbs_for_weight(weight_grams)
                .map(grams)
                .unwrap_or_else(|| CANNOT_CALCULATE.to_string()),
            requested_weight: format!("{}g", plain_number(weight_grams)),
            carbs_per_100g: detail
                .carbs_per_100g()
                .map(grams)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            original_serving: format!(
                "{}g per {} {} ({}g)",
                plain_number(detail.total_carbohydrate_grams),
                plain_number(detail.serving_qty),
                detail.serving_unit,
                serving_weight
            ),
        }
    }
}

/// Shortest decimal form, with `-0` shown as `0`.
pub fn plain_number(value: f64) -> String {
    (value + 0.0).to_string()
}

// Ties round away from zero; `{:.2}` alone rounds them to even
fn grams(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.2}g", sign, (value.abs() * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banana(serving_weight_grams: Option<f64>) -> NutrientDetail {
        NutrientDetail {
            food_name: "banana".to_string(),
            total_carbohydrate_grams: 25.0,
            serving_weight_grams,
            serving_qty: 1.0,
            serving_unit: "medium (3in)".to_string(),
        }
    }

    #[test]
    fn test_row_for_known_serving_weight() {
        let row = ReportRow::build(&banana(Some(100.0)), 200.0);
        assert_eq!(row.food_name, "banana");
        assert_eq!(row.carbs_per_100g, "25.00g");
        assert_eq!(row.carbs_in_provided_weight, "50.00g");
        assert_eq!(row.requested_weight, "200g");
        assert_eq!(row.original_serving, "25g per 1 medium (3in) (100g)");
    }

    #[test]
    fn test_zero_serving_weight_cannot_be_scaled() {
        let row = ReportRow::build(&banana(Some(0.0)), 200.0);
        assert_eq!(row.carbs_per_100g, UNKNOWN);
        assert_eq!(row.carbs_in_provided_weight, CANNOT_CALCULATE);
        assert_eq!(row.original_serving, "25g per 1 medium (3in) (0g)");
    }

    #[test]
    fn test_missing_serving_weight_cannot_be_scaled() {
        let row = ReportRow::build(&banana(None), 50.0);
        assert_eq!(row.carbs_per_100g, UNKNOWN);
        assert_eq!(row.carbs_in_provided_weight, CANNOT_CALCULATE);
        assert_eq!(row.original_serving, "25g per 1 medium (3in) (?g)");
    }

    #[test]
    fn test_carbs_scale_linearly_with_weight() {
        let detail = NutrientDetail {
            serving_weight_grams: Some(118.0),
            total_carbohydrate_grams: 27.0,
            ..banana(None)
        };
        let per_100g = detail.carbs_per_100g().unwrap();
        assert!((per_100g - 2700.0 / 118.0).abs() < 1e-9);

        for weight in [1.0, 37.5, 150.0, 1000.0] {
            let single = detail.carbs_for_weight(weight).unwrap();
            let double = detail.carbs_for_weight(weight * 2.0).unwrap();
            assert!((double - 2.0 * single).abs() < 1e-9);
            assert!((single - per_100g * weight / 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_two_decimal_ties_round_up() {
        let detail = NutrientDetail {
            total_carbohydrate_grams: 25.0,
            serving_weight_grams: Some(200.0),
            ..banana(None)
        };
        let row = ReportRow::build(&detail, 1.0);
        assert_eq!(row.carbs_per_100g, "12.50g");
        assert_eq!(row.carbs_in_provided_weight, "0.13g");

        assert_eq!(grams(0.125), "0.13g");
        assert_eq!(grams(2.675), "2.67g");
        assert_eq!(grams(1.005), "1.00g");
        assert_eq!(grams(0.0), "0.00g");
        assert_eq!(grams(-0.0), "0.00g");
        assert_eq!(grams(-0.125), "-0.13g");
    }

    #[test]
    fn test_negative_zero_weight_renders_as_zero() {
        let row = ReportRow::build(&banana(Some(100.0)), -0.0);
        assert_eq!(row.requested_weight, "0g");
        assert_eq!(plain_number(-0.0), "0");
        assert_eq!(plain_number(-2.5), "-2.5");
    }

    #[test]
    fn test_raw_values_render_unrounded() {
        let detail = NutrientDetail {
            total_carbohydrate_grams: 13.81,
            serving_weight_grams: Some(182.5),
            serving_qty: 0.5,
            serving_unit: "cup".to_string(),
            ..banana(None)
        };
        let row = ReportRow::build(&detail, 12.5);
        assert_eq!(row.requested_weight, "12.5g");
        assert_eq!(row.original_serving, "13.81g per 0.5 cup (182.5g)");
    }
}
