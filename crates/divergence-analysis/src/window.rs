//! Value extraction and trailing time-window filtering.
//!
//! The detector itself never filters by time; callers that want a recent-only
//! comparison window the series here first.

use chrono::{DateTime, Duration, Utc};

use divergence_core::models::{MetricSeries, TimeSeriesPoint};

/// Raw values in series order.
pub fn extract_values(series: &MetricSeries) -> Vec<f64> {
    series.data.iter().map(|p| p.value).collect()
}

/// Start of a trailing window of `window_hours` ending at `now`.
///
/// Fractional hours are honored to the millisecond. A window reaching past the
/// representable range starts at the earliest representable instant.
pub fn window_start(window_hours: f64, now: DateTime<Utc>) -> DateTime<Utc> {
    let millis = (window_hours * 3_600_000.0).round() as i64;
    Duration::try_milliseconds(millis)
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn in_window(point: &TimeSeriesPoint, start: DateTime<Utc>) -> bool {
    point.timestamp >= start
}

/// Values of points with `timestamp >= now - window_hours`, order preserved.
///
/// Points after `now` are kept; only the lower edge is enforced.
pub fn values_in_window(series: &MetricSeries, window_hours: f64, now: DateTime<Utc>) -> Vec<f64> {
    let start = window_start(window_hours, now);
    series
        .data
        .iter()
        .filter(|p| in_window(p, start))
        .map(|p| p.value)
        .collect()
}

/// A copy of `series` restricted to its trailing window. Name, color and unit are kept.
pub fn series_in_window(
    series: &MetricSeries,
    window_hours: f64,
    now: DateTime<Utc>,
) -> MetricSeries {
    let start = window_start(window_hours, now);
    MetricSeries {
        name: series.name.clone(),
        data: series
            .data
            .iter()
            .filter(|p| in_window(p, start))
            .cloned()
            .collect(),
        color: series.color.clone(),
        unit: series.unit.clone(),
    }
}

/// The last `size` elements of `values` (all of them if `size` exceeds the length).
pub(crate) fn tail(values: &[f64], size: usize) -> &[f64] {
    &values[values.len().saturating_sub(size)..]
}
