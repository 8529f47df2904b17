//! Cumulative time-series projection for charting.
//!
//! The projector turns a plan into the point sequence a charting layer
//! consumes. Points are regenerated fresh on every call; nothing is cached
//! between projections.

use loadplan_core::{MetricValues, Plan};
use serde::Serialize;

use crate::duration;
use crate::metrics;

/// One sample of the derived cumulative time series.
///
/// Serialized points carry every discovered metric key inline, so a chart
/// can address series by metric name directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Cumulative time in minutes from plan start
    pub time: f64,
    /// Clock rendering of `time`: `H:MM:SS`, or `MM:SS` under an hour
    pub formatted_time: String,
    pub phase_name: String,
    pub description: String,
    #[serde(flatten)]
    pub metrics: MetricValues,
}

/// Project a plan into an ordered cumulative point sequence.
///
/// The sequence opens with a synthetic origin point so line charts ramp
/// from a defined zero, and always has `phases.len() + 1` entries. Time is
/// monotonically non-decreasing, not strictly increasing: zero-duration
/// phases produce points sharing a `time` value, each still independently
/// addressable for tooltips.
pub fn project(plan: &Plan) -> Vec<ChartPoint> {
    let keys = metrics::discover(&plan.phases);

    let mut points = Vec::with_capacity(plan.phases.len() + 1);
    let mut origin = MetricValues::new();
    for key in &keys {
        origin.insert(key.clone(), 0.0);
    }
    points.push(ChartPoint {
        time: 0.0,
        formatted_time: "00:00".to_string(),
        phase_name: "Start".to_string(),
        description: "Start of test".to_string(),
        metrics: origin,
    });

    let mut current = 0.0;
    for phase in &plan.phases {
        current += duration::parse(&phase.duration);

        let mut values = MetricValues::new();
        for key in &keys {
            values.insert(key.clone(), phase.metric(key));
        }
        points.push(ChartPoint {
            time: round2(current),
            formatted_time: format_clock(current),
            phase_name: phase.name.clone(),
            description: phase.description.clone(),
            metrics: values,
        });
    }

    points
}

/// Render cumulative minutes as a clock string from total rounded seconds
fn format_clock(minutes: f64) -> String {
    let total_seconds = (minutes * 60.0).round() as i64;
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{mins:02}:{secs:02}")
    } else {
        format!("{mins:02}:{secs:02}")
    }
}

fn round2(minutes: f64) -> f64 {
    (minutes * 100.0).round() / 100.0
}
