pub mod error;
pub mod food;

// Re-export commonly used items
pub use error::{CarbError, ServiceError};
pub use food::analysis::{CarbEstimator, LookupRequest, NutrientDetail, ReportRow};
pub use food::api::{NutritionLookup, NutritionixClient};
pub use food::config::NutritionixConfig;
pub use food::report::ReportFormat;
