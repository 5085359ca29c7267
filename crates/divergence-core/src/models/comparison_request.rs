use serde::{Deserialize, Serialize};

use super::MetricSeries;
use crate::errors::InputError;

/// A twin/baseline pair as submitted by an upstream service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub twin: MetricSeries,
    pub baseline: MetricSeries,
}

impl ComparisonRequest {
    /// Decode a request from JSON. Timestamps must be RFC 3339.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let request: ComparisonRequest = serde_json::from_str(json)?;
        if request.twin.name.trim().is_empty() {
            return Err(InputError::EmptySeriesName { role: "twin" });
        }
        if request.baseline.name.trim().is_empty() {
            return Err(InputError::EmptySeriesName { role: "baseline" });
        }
        Ok(request)
    }
}
