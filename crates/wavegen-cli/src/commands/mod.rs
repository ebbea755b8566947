//! CLI command implementations

pub mod generate;
pub mod json_output;
pub mod template;
pub mod validate;

mod reporting;
