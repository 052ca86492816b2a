pub mod nutritionix;
pub mod traits;

// Re-export common types
pub use nutritionix::{CommonFood, FoodNutrients, NutritionixClient};
pub use traits::NutritionLookup;
