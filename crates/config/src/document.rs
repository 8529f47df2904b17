//! Plan document codec.
//!
//! A document lacking a `phases` array is rejected before any other
//! deserialization detail is reported, so a corrupt import gets one clear
//! corrective message instead of a field-by-field serde trace.

use loadplan_core::{Error, Plan, Result, ResultExt};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse a plan document from JSON text.
pub fn parse_plan(json: &str) -> Result<Plan> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| Error::document(format!("not valid JSON: {e}")))?;

    match value.get("phases") {
        Some(serde_json::Value::Array(_)) => {}
        Some(_) => return Err(Error::document("'phases' must be an array")),
        None => return Err(Error::document("missing 'phases' array")),
    }

    let plan: Plan = serde_json::from_value(value).context("plan document")?;
    if plan.phases.is_empty() {
        warn!("plan document has an empty phase list");
    }
    Ok(plan)
}

/// Load a plan document from a file.
pub fn load_plan(path: impl AsRef<Path>) -> Result<Plan> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading plan document");
    let json = fs::read_to_string(path).map_err(|e| Error::file_system(path, "read", e))?;
    parse_plan(&json)
}

/// Render a plan as the pretty-printed document form.
pub fn to_json_string(plan: &Plan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Save a plan document to a file.
pub fn save_plan(path: impl AsRef<Path>, plan: &Plan) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "saving plan document");
    let json = to_json_string(plan)?;
    fs::write(path, json).map_err(|e| Error::file_system(path, "write", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SCENARIO: &str = r#"{
        "planName": "Nightly soak",
        "version": "1.0",
        "nodes": "8",
        "defaults": { "timeUnit": "m", "notes": "conUsu=Consultas" },
        "phases": [
            { "name": "Warmup", "duration": "1m", "description": "Ramp", "conUsu": 25 },
            { "name": "Peak", "duration": "2m", "description": "Hold", "conUsu": 60 }
        ]
    }"#;

    #[test]
    fn parses_a_well_formed_document() {
        let plan = parse_plan(SCENARIO).unwrap();
        assert_eq!(plan.plan_name, "Nightly soak");
        assert_eq!(plan.phases.len(), 2);
        assert_eq!(plan.phases[1].metric("conUsu"), 60.0);
    }

    #[test]
    fn missing_phases_array_is_rejected() {
        let err = parse_plan(r#"{"planName":"x"}"#).unwrap_err();
        assert!(matches!(err, Error::Document { .. }));
        assert!(err.to_string().contains("phases"));
    }

    #[test]
    fn non_array_phases_is_rejected() {
        let err = parse_plan(r#"{"phases": 3}"#).unwrap_err();
        assert!(err.to_string().contains("must be an array"));
    }

    #[test]
    fn invalid_json_is_a_document_error() {
        assert!(matches!(
            parse_plan("{nope"),
            Err(Error::Document { .. })
        ));
    }

    #[test]
    fn saves_and_reloads_the_same_plan() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.json");

        let plan = parse_plan(SCENARIO).unwrap();
        save_plan(&path, &plan).unwrap();
        let reloaded = load_plan(&path).unwrap();
        assert_eq!(plan, reloaded);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_plan("/nonexistent/plan.json").unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
        assert!(err.to_string().contains("/nonexistent/plan.json"));
    }
}
