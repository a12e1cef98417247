//! Export of a finished space into external formats.
//!
//! - **PlantUML**: class-diagram text, the primary output
//! - **JSON**: the whole space as one document for other tools

pub mod json;
pub mod puml;

pub use json::{export_json, export_json_filtered};
pub use puml::export_puml;
