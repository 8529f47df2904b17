//! Plan document loading, validation, and saving.
//!
//! The JSON document is the import/export artifact for the whole system:
//! field names in the file match the in-memory model's serde names exactly.
//! This crate owns the document boundary; everything past it works on the
//! typed [`loadplan_core::Plan`].

pub mod document;

pub use self::document::{load_plan, parse_plan, save_plan, to_json_string};
