//! Annotation (label) codec.
//!
//! `defaults.notes` persists metric labels as a flat `key=label, key=label`
//! string. The structured mapping is a derived, ephemeral view: decode at
//! the boundary, work on the map, and re-encode only when writing back.

use indexmap::IndexMap;

/// Decode a notes string into an ordered key -> label mapping.
///
/// Segments are split on `,`, then on the first `=`. A segment without a
/// `=`, or with an empty key or label after trimming, is silently dropped.
/// A duplicate key keeps the label seen last.
pub fn decode(notes: &str) -> IndexMap<String, String> {
    let mut labels = IndexMap::new();
    if notes.is_empty() {
        return labels;
    }
    for segment in notes.split(',') {
        let Some((key, label)) = segment.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let label = label.trim();
        if !key.is_empty() && !label.is_empty() {
            labels.insert(key.to_string(), label.to_string());
        }
    }
    labels
}

/// Encode a mapping back into the persisted notes form, in map iteration
/// order.
pub fn encode(labels: &IndexMap<String, String>) -> String {
    labels
        .iter()
        .map(|(key, label)| format!("{key}={label}"))
        .collect::<Vec<_>>()
        .join(", ")
}
