use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure talking to the nutrition service.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API request failed with status {status}: {payload}")]
    Status { status: StatusCode, payload: Value },
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ServiceError {
    /// Structured body the service returned alongside a failing status.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ServiceError::Status { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum CarbError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Food search failed: {0}")]
    Search(#[source] ServiceError),
    #[error("Nutrient lookup for '{food}' failed: {source}")]
    DetailFetch {
        food: String,
        #[source]
        source: ServiceError,
    },
    #[error("Malformed response from nutrition service: {0}")]
    MalformedResponse(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CarbError {
    pub fn service_payload(&self) -> Option<&Value> {
        match self {
            CarbError::Search(source) | CarbError::DetailFetch { source, .. } => source.payload(),
            _ => None,
        }
    }

    pub(crate) fn from_search(err: ServiceError) -> Self {
        match err {
            ServiceError::Decode(e) => CarbError::MalformedResponse(format!("search: {}", e)),
            other => CarbError::Search(other),
        }
    }

    pub(crate) fn from_detail(food: &str, err: ServiceError) -> Self {
        match err {
            ServiceError::Decode(e) => {
                CarbError::MalformedResponse(format!("nutrients for '{}': {}", food, e))
            }
            other => CarbError::DetailFetch {
                food: food.to_string(),
                source: other,
            },
        }
    }
}
