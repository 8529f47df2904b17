//! The plan derivation engine.
//!
//! Everything here is a pure function over plain data: a caller holds an
//! authoritative plan and pushes it through these modules on every render
//! or export. No module retains state between calls, and no input is ever
//! mutated in place.
//!
//! ## Key Components
//!
//! - **`duration`**: human-readable duration codec (`10m`, `30s`, `1.5h`).
//! - **`notes`**: boundary codec for the `key=label` annotation string.
//! - **`metrics`**: dynamic metric-key discovery and phase-set editing.
//! - **`scale`**: the dual-axis (magnitude/time) scaling transform.
//! - **`chart`**: the cumulative time-series projector used for charting.
//! - **`edit`**: structural plan editing (phases, plan-level metrics).

pub mod chart;
pub mod duration;
pub mod edit;
pub mod metrics;
pub mod notes;
pub mod scale;

pub use self::{
    chart::{project, ChartPoint},
    scale::{scale, scale_with_policy, ScalePolicy},
};
