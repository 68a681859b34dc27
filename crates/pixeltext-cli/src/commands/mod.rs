//! CLI command implementations

pub mod json_output;
pub mod render;
