//! Statistical snapshot records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point-in-time aggregate of campaign performance metrics.
///
/// Metric names and shapes are remote-owned and vary with the metric
/// selectors in the query, so they are kept as an opaque map rather than
/// a fixed field set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Id of the entity the snapshot aggregates over, when scoped.
    #[serde(default)]
    pub id: Option<String>,

    /// Entity type the id refers to, e.g. `CAMPAIGN`.
    #[serde(default)]
    pub id_type: Option<String>,

    /// Aggregation granularity, e.g. `DAY` or `TOTAL`.
    #[serde(default)]
    pub granularity: Option<String>,

    /// Inclusive start of the aggregation window.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,

    /// Exclusive end of the aggregation window.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,

    /// Metric name to value(s), passed through from the remote service.
    #[serde(flatten)]
    pub metrics: serde_json::Map<String, serde_json::Value>,
}

impl StatsSnapshot {
    /// Looks up a metric by its remote name.
    pub fn metric(&self, name: &str) -> Option<&serde_json::Value> {
        self.metrics.get(name)
    }

    /// Returns true if the snapshot carries any metric values.
    pub fn has_data(&self) -> bool {
        !self.metrics.is_empty()
    }
}
