/// Constants used throughout the loadplan codebase
// Phase fields that are part of the fixed record and can never be metric keys
pub const RESERVED_PHASE_FIELDS: &[&str] = &["name", "duration", "description"];

// Fields applied to a freshly appended phase
pub const DEFAULT_PHASE_DURATION: &str = "1m";
pub const DEFAULT_PHASE_DESCRIPTION: &str = "New phase";

// Environment variable names
pub const LOADPLAN_LOG_VAR: &str = "LOADPLAN_LOG";

// Default duration unit for plan documents
pub const DEFAULT_TIME_UNIT: &str = "m";

// Scale ratio treated as identity on either axis
pub const IDENTITY_PERCENT: f64 = 100.0;
