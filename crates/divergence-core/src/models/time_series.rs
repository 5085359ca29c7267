//! Time series models for the twin and baseline inputs.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One observation in a metric series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl TimeSeriesPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self {
            timestamp,
            value,
            label: None,
            metadata: None,
        }
    }
}

/// A named, ordered collection of points.
///
/// Insertion order is the temporal order. Nothing in the detector sorts it;
/// callers guarantee ascending timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub name: String,
    #[serde(default)]
    pub data: Vec<TimeSeriesPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MetricSeries {
    pub fn new(name: impl Into<String>, data: Vec<TimeSeriesPoint>) -> Self {
        Self {
            name: name.into(),
            data,
            color: None,
            unit: None,
        }
    }

    /// Build a series from raw values sampled at a fixed interval from `start`.
    pub fn from_values(
        name: impl Into<String>,
        start: DateTime<Utc>,
        interval: Duration,
        values: &[f64],
    ) -> Self {
        let data = values
            .iter()
            .enumerate()
            .map(|(i, &v)| TimeSeriesPoint::new(start + interval * i as i32, v))
            .collect();
        Self::new(name, data)
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
