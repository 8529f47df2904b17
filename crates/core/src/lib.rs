//! Core domain types, errors, and constants for the `loadplan` workspace.
//!
//! This crate establishes the foundational data structures and error handling
//! mechanisms used throughout the entire codebase. It aims to provide clear,
//! type-safe, and consistent building blocks.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing all possible failure modes for predictable error handling.
//! - **`types`**: Contains the plan document model (`Plan`, `Phase`,
//!   `Defaults`) and the `MetricValues` ordered-map wrapper that enforces
//!   the dynamic-metric invariants at the type level.
//! - **`constants`**: A collection of shared, static constants such as
//!   reserved field names and environment variable names.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    types::*,
};
