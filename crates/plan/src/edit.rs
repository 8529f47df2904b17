//! Structural plan editing: phases and plan-level metric management.
//!
//! These are the operations an editing surface performs around the engine,
//! expressed as pure functions. `defaults.notes` stays in sync through the
//! notes codec whenever the metric set changes, so the persisted labels
//! never drift from the phase fields.

use loadplan_core::{
    Error, Phase, Plan, Result, DEFAULT_PHASE_DESCRIPTION, DEFAULT_PHASE_DURATION,
};
use tracing::debug;

use crate::{metrics, notes};

/// Append a new phase carrying every discovered metric at zero.
pub fn add_phase(plan: &Plan) -> Plan {
    let mut phase = Phase::new(
        format!("Phase {}", plan.phases.len() + 1),
        DEFAULT_PHASE_DURATION,
        DEFAULT_PHASE_DESCRIPTION,
    );
    for key in metrics::discover(&plan.phases) {
        phase.metrics.insert(key, 0.0);
    }

    let mut edited = plan.clone();
    edited.phases.push(phase);
    edited
}

/// Remove the phase at `index`.
///
/// A plan needs at least one phase to stay meaningful, so removing the
/// last remaining phase is refused.
pub fn remove_phase(plan: &Plan, index: usize) -> Result<Plan> {
    if plan.phases.len() <= 1 {
        return Err(Error::LastPhase);
    }
    if index >= plan.phases.len() {
        return Err(Error::phase_index(index, plan.phases.len()));
    }
    let mut edited = plan.clone();
    edited.phases.remove(index);
    Ok(edited)
}

/// Register a new metric across every phase and record its label in
/// `defaults.notes`. Nothing is changed when registration fails.
pub fn add_metric(plan: &Plan, key: &str, label: &str) -> Result<Plan> {
    let phases = metrics::add_metric(&plan.phases, key)?;

    let mut labels = notes::decode(&plan.defaults.notes);
    labels.insert(key.to_string(), label.to_string());
    debug!(key, label, "labelled new metric");

    let mut edited = plan.clone();
    edited.defaults.notes = notes::encode(&labels);
    edited.phases = phases;
    Ok(edited)
}

/// Drop a metric from every phase and from the notes labels.
pub fn remove_metric(plan: &Plan, key: &str) -> Plan {
    let phases = metrics::remove_metric(&plan.phases, key);

    let mut labels = notes::decode(&plan.defaults.notes);
    labels.shift_remove(key);

    let mut edited = plan.clone();
    edited.defaults.notes = notes::encode(&labels);
    edited.phases = phases;
    edited
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadplan_core::Defaults;

    fn sample_plan() -> Plan {
        let mut first = Phase::new("01 - Warmup", "1m", "Ramp");
        first.metrics.insert("conUsu", 25.0);
        let mut second = Phase::new("02 - Peak", "2m", "Hold");
        second.metrics.insert("conUsu", 60.0);

        Plan {
            plan_name: "Soak".to_string(),
            version: "1.0".to_string(),
            nodes: "8".to_string(),
            test_tool: None,
            defaults: Defaults {
                time_unit: "m".to_string(),
                notes: "conUsu=Consultas".to_string(),
            },
            resources: Default::default(),
            test_resources: None,
            phases: vec![first, second],
        }
    }

    #[test]
    fn added_phase_gets_defaults_and_zeroed_metrics() {
        let edited = add_phase(&sample_plan());
        let added = edited.phases.last().unwrap();
        assert_eq!(added.name, "Phase 3");
        assert_eq!(added.duration, "1m");
        assert_eq!(added.description, "New phase");
        assert_eq!(added.metric("conUsu"), 0.0);
    }

    #[test]
    fn removing_a_phase_keeps_the_rest_in_order() {
        let edited = remove_phase(&sample_plan(), 0).unwrap();
        assert_eq!(edited.phases.len(), 1);
        assert_eq!(edited.phases[0].name, "02 - Peak");
    }

    #[test]
    fn the_last_phase_cannot_be_removed() {
        let mut plan = sample_plan();
        plan.phases.truncate(1);
        assert!(matches!(remove_phase(&plan, 0), Err(Error::LastPhase)));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert!(matches!(
            remove_phase(&sample_plan(), 5),
            Err(Error::PhaseIndex { index: 5, count: 2 })
        ));
    }

    #[test]
    fn add_metric_updates_phases_and_notes_together() {
        let edited = add_metric(&sample_plan(), "recSw", "SW Recaudos").unwrap();
        assert!(edited.phases.iter().all(|p| p.metrics.contains("recSw")));
        assert_eq!(
            edited.defaults.notes,
            "conUsu=Consultas, recSw=SW Recaudos"
        );
    }

    #[test]
    fn add_metric_rejects_duplicates_without_mutation() {
        let plan = sample_plan();
        assert!(matches!(
            add_metric(&plan, "conUsu", "Again"),
            Err(Error::DuplicateMetric { .. })
        ));
        assert_eq!(plan, sample_plan());
    }

    #[test]
    fn remove_metric_clears_phases_and_notes() {
        let edited = remove_metric(&sample_plan(), "conUsu");
        assert!(edited.phases.iter().all(|p| !p.metrics.contains("conUsu")));
        assert_eq!(edited.defaults.notes, "");
    }
}
