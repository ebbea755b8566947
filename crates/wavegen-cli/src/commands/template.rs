//! Template command implementation
//!
//! Prints a starter request for a family, with the family's default
//! parameters filled in.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use wavegen_spec::{Family, Request};

use super::json_output::{error_codes, print_json, JsonError, TemplateOutput};

/// Sample rate used in templates.
pub const TEMPLATE_SAMPLE_RATE: u32 = 44100;

/// Builds the starter request for a family tag.
///
/// Returns `None` for tags that name no family.
pub fn template_request(tag: &str) -> Option<Request> {
    let family = Family::from_tag(tag)?;
    Some(
        Request::builder(family, TEMPLATE_SAMPLE_RATE)
            .frequency(440.0)
            .amplitude(0.8)
            .duration(1.0)
            .build(),
    )
}

/// Run the template command
///
/// # Returns
/// Exit code: 0 if the family is known, 1 otherwise
pub fn run(family: &str, json_output: bool) -> Result<ExitCode> {
    let Some(request) = template_request(family) else {
        let message = format!(
            "unknown family '{}' (expected one of: {})",
            family,
            Family::TAGS.join(", ")
        );
        if json_output {
            print_json(&TemplateOutput::failure(vec![JsonError::new(
                error_codes::UNKNOWN_FAMILY,
                message,
            )]))?;
        } else {
            eprintln!("{}: {}", "error".red(), message);
        }
        return Ok(ExitCode::from(1));
    };

    if json_output {
        let value = request
            .to_value()
            .context("Failed to serialize template request")?;
        print_json(&TemplateOutput::success(value))?;
    } else {
        let json = request
            .to_json_pretty()
            .context("Failed to serialize template request")?;
        println!("{}", json);
    }
    Ok(ExitCode::SUCCESS)
}
