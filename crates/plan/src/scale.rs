//! Dual-axis plan scaling.
//!
//! A derived plan is produced by multiplying durations and metric
//! magnitudes by independent percentages. The input plan is never touched;
//! editing surfaces keep the raw plan and re-derive on every render so
//! repeated scaling never accumulates rounding loss.

use loadplan_core::{Plan, IDENTITY_PERCENT};
use tracing::debug;

use crate::duration::{self, trim_decimal};
use crate::metrics;

/// Policy knobs for the scaling transform.
///
/// Scaled metric values are floored to a minimum of 1 by default, which can
/// activate a metric that was 0 in the source phase. `allow_zero` clamps at
/// zero instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalePolicy {
    /// Let metrics that scale to zero stay at zero instead of flooring to 1
    pub allow_zero: bool,
}

/// Scale a plan along independent magnitude and time axes with the default
/// policy.
pub fn scale(plan: &Plan, vu_percent: f64, time_percent: f64) -> Plan {
    scale_with_policy(plan, vu_percent, time_percent, ScalePolicy::default())
}

/// Scale a plan along independent magnitude and time axes.
///
/// Durations are parsed, multiplied by `time_percent / 100`, and
/// re-formatted. Metric values are multiplied by `vu_percent / 100` and
/// rounded to whole units. When both percentages are exactly 100 the input
/// is returned unchanged, with no plan-name annotation.
pub fn scale_with_policy(
    plan: &Plan,
    vu_percent: f64,
    time_percent: f64,
    policy: ScalePolicy,
) -> Plan {
    if vu_percent == IDENTITY_PERCENT && time_percent == IDENTITY_PERCENT {
        return plan.clone();
    }

    let vu_ratio = vu_percent / 100.0;
    let time_ratio = time_percent / 100.0;
    let floor = if policy.allow_zero { 0.0 } else { 1.0 };

    // Keys are discovered once over the whole phase set, not per phase.
    let keys = metrics::discover(&plan.phases);
    debug!(vu_percent, time_percent, keys = keys.len(), "scaling plan");

    let phases = plan
        .phases
        .iter()
        .map(|phase| {
            let mut scaled = phase.clone();
            scaled.duration = duration::format(duration::parse(&phase.duration) * time_ratio);
            for key in &keys {
                if let Some(value) = phase.metrics.get(key) {
                    scaled
                        .metrics
                        .insert(key.clone(), (value * vu_ratio).round().max(floor));
                }
            }
            scaled
        })
        .collect();

    let mut derived = plan.clone();
    derived.plan_name = format!(
        "{} (VU: {}%, Time: {}%)",
        plan.plan_name,
        trim_decimal(vu_percent),
        trim_decimal(time_percent)
    );
    derived.phases = phases;
    derived
}
