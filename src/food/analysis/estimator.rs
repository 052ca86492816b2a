use futures::future::try_join_all;

use crate::error::CarbError;
use crate::food::analysis::carbs::{NutrientDetail, ReportRow};
use crate::food::analysis::input::LookupRequest;
use crate::food::api::{CommonFood, NutritionLookup};
use crate::food::report::{self, ReportFormat};

/// How many search matches get a nutrient lookup.
pub const MAX_CANDIDATES: usize = 3;

pub struct CarbEstimator<L: NutritionLookup> {
    lookup: L,
}

impl<L: NutritionLookup> CarbEstimator<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// First `MAX_CANDIDATES` common foods, in the order the service ranked them.
    pub async fn search_candidates(&self, food_name: &str) -> Result<Vec<CommonFood>, CarbError> {
        let mut common = self
            .lookup
            .search_instant(food_name)
            .await
            .map_err(CarbError::from_search)?;

        if common.is_empty() {
            tracing::warn!(query = food_name, "No common foods matched");
        }
        common.truncate(MAX_CANDIDATES);
        Ok(common)
    }

    pub async fn fetch_detail(&self, candidate: &CommonFood) -> Result<NutrientDetail, CarbError> {
        let foods = self
            .lookup
            .natural_nutrients(&candidate.food_name)
            .await
            .map_err(|e| CarbError::from_detail(&candidate.food_name, e))?;

        let record = foods.into_iter().next().ok_or_else(|| {
            CarbError::MalformedResponse(format!(
                "no foods returned for '{}'",
                candidate.food_name
            ))
        })?;

        Ok(NutrientDetail::from_record(&candidate.food_name, record))
    }

    /// Search, then look up every candidate concurrently. Rows keep candidate order;
    /// any failed lookup fails the whole estimate.
    pub async fn estimate(&self, request: &LookupRequest) -> Result<Vec<ReportRow>, CarbError> {
        let candidates = self.search_candidates(&request.food_name).await?;
        tracing::debug!(count = candidates.len(), "Fetching nutrient details");

        let rows = try_join_all(candidates.iter().map(|candidate| async move {
            let detail = self.fetch_detail(candidate).await?;
            Ok::<_, CarbError>(ReportRow::build(&detail, request.weight_grams))
        }))
        .await?;

        Ok(rows)
    }

    /// Validate raw input, estimate, print the report and hand the rows back.
    /// Errors are logged here once and then returned to the caller.
    pub async fn calculate_carbs(
        &self,
        food_name: Option<&str>,
        weight_raw: Option<&str>,
        format: ReportFormat,
    ) -> Result<Vec<ReportRow>, CarbError> {
        let result = async {
            let request = LookupRequest::parse(food_name, weight_raw)?;
            tracing::info!(
                food = %request.food_name,
                weight = request.weight_grams,
                "Estimating carbohydrates"
            );
            let rows = self.estimate(&request).await?;
            report::print_report(&request, &rows, format);
            Ok::<_, CarbError>(rows)
        }
        .await;

        if let Err(e) = &result {
            match e.service_payload() {
                Some(payload) => tracing::error!(%payload, "Error: {}", e),
                None => tracing::error!("Error: {}", e),
            }
        }
        result
    }
}
