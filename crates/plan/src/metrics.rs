//! Dynamic metric-key discovery and phase-set metric editing.
//!
//! Different phases may carry different metric sets; the registry unions
//! them without ever sorting, because charts and tables render columns in
//! discovery order and that order must be stable across renders.

use loadplan_core::{Error, Phase, Result, RESERVED_PHASE_FIELDS};
use tracing::debug;

/// Collect every metric key present across the phase set, each key once,
/// in first-seen order. A metric present only in a later phase appears at
/// the position of its first occurrence.
pub fn discover(phases: &[Phase]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for phase in phases {
        for key in phase.metrics.keys() {
            if !keys.iter().any(|seen| seen == key) {
                keys.push(key.clone());
            }
        }
    }
    keys
}

/// Add a metric to every phase, initialized to zero.
///
/// Fails without touching anything if the key is already registered or
/// collides with a fixed phase field.
pub fn add_metric(phases: &[Phase], key: &str) -> Result<Vec<Phase>> {
    if RESERVED_PHASE_FIELDS.contains(&key) {
        return Err(Error::reserved_metric(key));
    }
    if discover(phases).iter().any(|registered| registered == key) {
        return Err(Error::duplicate_metric(key));
    }

    debug!(key, phases = phases.len(), "registering metric");
    Ok(phases
        .iter()
        .map(|phase| {
            let mut phase = phase.clone();
            phase.metrics.insert(key, 0.0);
            phase
        })
        .collect())
}

/// Remove a metric from every phase that has it. Phases lacking the key
/// are returned as they are; an unknown key is a no-op, not an error.
pub fn remove_metric(phases: &[Phase], key: &str) -> Vec<Phase> {
    phases
        .iter()
        .map(|phase| {
            let mut phase = phase.clone();
            phase.metrics.remove(key);
            phase
        })
        .collect()
}
