//! Validate command implementation
//!
//! Loads a request, applies overrides, and reports every validation error
//! and warning without generating anything.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use wavegen_spec::{canonical_request_hash, validate_request};

use super::json_output::{
    input_error_to_json, print_json, validation_error_to_json, validation_warning_to_json,
    JsonError, JsonWarning, ValidateOutput, ValidateResult,
};
use super::reporting::{print_errors, print_warnings, short_hash};
use crate::input::{apply_overrides, load_request, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `request_path` - Path to the request file
/// * `sample_rate` - Optional sample rate override
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(request_path: &str, sample_rate: Option<u32>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(request_path, sample_rate)
    } else {
        run_human(request_path, sample_rate)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(request_path: &str, sample_rate: Option<u32>) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Validating:".cyan().bold(), request_path);

    let LoadResult {
        request,
        source_hash,
    } = load_request(Path::new(request_path))
        .with_context(|| format!("Failed to load request file: {}", request_path))?;
    let request = apply_overrides(request, sample_rate, None);

    println!("{} {}", "Source:".dimmed(), short_hash(&source_hash));
    println!(
        "{} {} at {} Hz",
        "Family:".dimmed(),
        request.family,
        request.sample_rate
    );

    let request_hash =
        canonical_request_hash(&request).unwrap_or_else(|_| "unknown".to_string());
    println!("{} {}", "Request hash:".dimmed(), short_hash(&request_hash));

    let result = validate_request(&request);
    let duration_ms = start.elapsed().as_millis() as u64;

    print_errors(&result.errors);
    print_warnings(&result.warnings);

    if result.is_ok() {
        println!(
            "\n{} Request is valid, {} samples ({}ms)",
            "SUCCESS".green().bold(),
            request.total_samples(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Request has {} error(s) ({}ms)",
            "FAILED".red().bold(),
            result.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(request_path: &str, sample_rate: Option<u32>) -> Result<ExitCode> {
    let start = Instant::now();

    let (request, source_hash) = match load_request(Path::new(request_path)) {
        Ok(LoadResult {
            request,
            source_hash,
        }) => (apply_overrides(request, sample_rate, None), source_hash),
        Err(e) => {
            let error = input_error_to_json(&e, Some(request_path));
            print_json(&ValidateOutput::failure(vec![error], vec![], None, None))?;
            return Ok(ExitCode::from(1));
        }
    };

    let request_hash =
        canonical_request_hash(&request).unwrap_or_else(|_| "unknown".to_string());
    let result = validate_request(&request);
    let duration_ms = start.elapsed().as_millis() as u64;

    let warnings: Vec<JsonWarning> = result
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    let output = if result.is_ok() {
        let details = ValidateResult {
            family: request.family.tag().to_string(),
            sample_rate: request.sample_rate,
            total_samples: request.total_samples(),
            duration_ms,
        };
        ValidateOutput::success(details, request_hash, source_hash, warnings)
    } else {
        let errors: Vec<JsonError> = result.errors.iter().map(validation_error_to_json).collect();
        ValidateOutput::failure(errors, warnings, Some(request_hash), Some(source_hash))
    };

    print_json(&output).context("Failed to serialize validate output")?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavegen_spec::{Family, KarplusStrongParams, Request};

    fn write_request(dir: &tempfile::TempDir, filename: &str, request: &Request) -> String {
        let path = dir.path().join(filename);
        std::fs::write(&path, request.to_json_pretty().unwrap()).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn validate_accepts_valid_request() {
        let tmp = tempfile::tempdir().unwrap();
        let request = Request::builder(Family::SquareTime, 8000).build();
        let path = write_request(&tmp, "square.json", &request);

        assert_eq!(run(&path, None, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(&path, None, true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn validate_rejects_bad_feedback_probability() {
        let tmp = tempfile::tempdir().unwrap();
        let params = KarplusStrongParams {
            feedback_probability: 1.5,
            ..KarplusStrongParams::default()
        };
        let request = Request::builder(Family::KarplusStrong(params), 8000).build();
        let path = write_request(&tmp, "pluck.json", &request);

        assert_eq!(run(&path, None, false).unwrap(), ExitCode::from(1));
        assert_eq!(run(&path, None, true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn validate_sample_rate_override_applies() {
        let tmp = tempfile::tempdir().unwrap();
        let request = Request::builder(Family::SineTime, 8000).build();
        let path = write_request(&tmp, "sine.json", &request);

        assert_eq!(run(&path, Some(0), true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn validate_missing_file() {
        assert!(run("/nonexistent/request.json", None, false).is_err());
        assert_eq!(
            run("/nonexistent/request.json", None, true).unwrap(),
            ExitCode::from(1)
        );
    }
}
