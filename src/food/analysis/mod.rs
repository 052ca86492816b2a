pub mod carbs;
pub mod estimator;
pub mod input;

pub use carbs::{NutrientDetail, ReportRow};
pub use estimator::{CarbEstimator, MAX_CANDIDATES};
pub use input::LookupRequest;
