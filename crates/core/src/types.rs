use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::constants::DEFAULT_TIME_UNIT;

/// Largest magnitude that still round-trips exactly through an f64
const MAX_INTEGRAL_METRIC: f64 = 9_007_199_254_740_992.0;

/// Ordered mapping of dynamic metric keys to their numeric magnitudes.
///
/// Metric fields live inline next to the fixed phase fields in the document
/// form, so this wrapper is flattened into [`Phase`] and [`ChartPoint`]
/// serialization. Insertion order is preserved because discovery order is
/// part of the charting contract.
///
/// Deserialization applies the numeric filter: a non-numeric stray field in
/// a phase is not a metric and is dropped. Integral values serialize as JSON
/// integers so exported documents keep the shape operators author by hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricValues(IndexMap<String, f64>);

impl MetricValues {
    /// Create an empty metric set
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Create from an existing map
    #[must_use]
    pub fn from_map(map: IndexMap<String, f64>) -> Self {
        Self(map)
    }

    /// Insert a metric, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(key.into(), value)
    }

    /// Get a metric value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Get a metric value by key, treating an absent metric as zero
    #[must_use]
    pub fn value(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    /// Remove a metric, preserving the order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.0.shift_remove(key)
    }

    /// Check if a metric exists
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over metric keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Get an iterator over the metrics
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, f64> {
        self.0.iter()
    }

    /// Get the number of metrics
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no metrics
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to the inner map
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, f64> {
        self.0
    }
}

impl Deref for MetricValues {
    type Target = IndexMap<String, f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MetricValues {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<IndexMap<String, f64>> for MetricValues {
    fn from(map: IndexMap<String, f64>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, f64)> for MetricValues {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MetricValues {
    type Item = (String, f64);
    type IntoIter = indexmap::map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for MetricValues {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            if value.fract() == 0.0 && value.is_finite() && value.abs() <= MAX_INTEGRAL_METRIC {
                map.serialize_entry(key, &(*value as i64))?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MetricValues {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MetricVisitor;

        impl<'de> Visitor<'de> for MetricVisitor {
            type Value = MetricValues;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of metric names to numeric values")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut values = IndexMap::new();
                while let Some(key) = access.next_key::<String>()? {
                    // Only numeric extras are metrics; anything else is dropped.
                    if let serde_json::Value::Number(number) =
                        access.next_value::<serde_json::Value>()?
                    {
                        if let Some(value) = number.as_f64() {
                            values.insert(key, value);
                        }
                    }
                }
                Ok(MetricValues(values))
            }
        }

        deserializer.deserialize_map(MetricVisitor)
    }
}

/// One contiguous interval of the scenario.
///
/// The fixed fields are the record every phase carries; the dynamic metric
/// fields are captured as a sibling map rather than mixed into the record,
/// so fixed-field names can never be shadowed by a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub metrics: MetricValues,
}

impl Phase {
    /// Create a phase with no metrics
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            description: description.into(),
            metrics: MetricValues::new(),
        }
    }

    /// Value for a metric key, or zero when this phase does not carry it
    #[must_use]
    pub fn metric(&self, key: &str) -> f64 {
        self.metrics.value(key)
    }
}

/// Plan-wide defaults.
///
/// `notes` is the persisted annotation string, not a structured mapping;
/// the mapping is a derived view produced by the notes codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    #[serde(default = "default_time_unit")]
    pub time_unit: String,
    #[serde(default)]
    pub notes: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            time_unit: DEFAULT_TIME_UNIT.to_string(),
            notes: String::new(),
        }
    }
}

fn default_time_unit() -> String {
    DEFAULT_TIME_UNIT.to_string()
}

/// Requested or limited compute for one tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLimit {
    pub cpu: String,
    pub memory: String,
}

/// Request/limit pair for one load-generation tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSpec {
    pub requests: ResourceLimit,
    pub limits: ResourceLimit,
}

/// Tool name -> resource spec. Opaque to the engine: never scaled, never
/// interpreted, passed through derivations unchanged.
pub type ResourceMap = IndexMap<String, ResourceSpec>;

/// Per-metric tool resource overrides, equally opaque to the engine
pub type TestResourceMap = IndexMap<String, ResourceMap>;

/// The full load-test scenario document.
///
/// Field names in the serialized form match the exchange format exactly;
/// `phases` is the only field a document must carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(default)]
    pub plan_name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub nodes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_tool: Option<String>,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub resources: ResourceMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_resources: Option<TestResourceMap>,
    pub phases: Vec<Phase>,
}

impl Plan {
    /// Number of phases in the scenario
    #[must_use]
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_phase_json() -> &'static str {
        r#"{"name":"01 - Warmup","duration":"1m","description":"Ramp","conUsu":25,"updUsu":25,"recSw":0}"#
    }

    #[test]
    fn phase_metrics_keep_document_order() {
        let phase: Phase = serde_json::from_str(sample_phase_json()).unwrap();
        let keys: Vec<&String> = phase.metrics.keys().collect();
        assert_eq!(keys, ["conUsu", "updUsu", "recSw"]);
        assert_eq!(phase.metric("conUsu"), 25.0);
        assert_eq!(phase.metric("recSw"), 0.0);
    }

    #[test]
    fn absent_metric_reads_as_zero() {
        let phase: Phase = serde_json::from_str(sample_phase_json()).unwrap();
        assert_eq!(phase.metric("liqCiclo9"), 0.0);
    }

    #[test]
    fn non_numeric_extras_are_dropped() {
        let json = r#"{"name":"A","duration":"1m","description":"","conUsu":10,"owner":"perf-team"}"#;
        let phase: Phase = serde_json::from_str(json).unwrap();
        assert_eq!(phase.metrics.len(), 1);
        assert!(phase.metrics.contains("conUsu"));
    }

    #[test]
    fn integral_metrics_serialize_as_integers() {
        let mut phase = Phase::new("A", "1m", "");
        phase.metrics.insert("conUsu", 25.0);
        phase.metrics.insert("ratio", 2.5);
        let json = serde_json::to_string(&phase).unwrap();
        assert!(json.contains(r#""conUsu":25"#), "got {json}");
        assert!(!json.contains(r#""conUsu":25.0"#), "got {json}");
        assert!(json.contains(r#""ratio":2.5"#), "got {json}");
    }

    #[test]
    fn plan_document_round_trips() {
        let json = r#"{
            "planName": "Nightly soak",
            "version": "1.0",
            "nodes": "8",
            "defaults": { "timeUnit": "m", "notes": "conUsu=Queries" },
            "resources": {
                "k6": {
                    "requests": { "cpu": "4", "memory": "6Gi" },
                    "limits": { "cpu": "6", "memory": "8Gi" }
                }
            },
            "phases": [
                { "name": "A", "duration": "1m", "description": "", "conUsu": 10 }
            ]
        }"#;
        let plan: Plan = serde_json::from_str(json).unwrap();
        let reparsed: Plan = serde_json::from_str(&serde_json::to_string(&plan).unwrap()).unwrap();
        assert_eq!(plan, reparsed);
        assert_eq!(plan.phase_count(), 1);
        assert_eq!(plan.resources["k6"].limits.cpu, "6");
    }

    #[test]
    fn missing_optional_metadata_takes_defaults() {
        let json = r#"{"phases":[{"name":"A","duration":"1m"}]}"#;
        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.defaults.time_unit, "m");
        assert_eq!(plan.phases[0].description, "");
        assert!(plan.test_tool.is_none());
    }
}
