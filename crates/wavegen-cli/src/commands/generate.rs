//! Generate command implementation
//!
//! Loads a request, applies overrides, generates the samples and prints a
//! summary. With `--output` the samples are also written as a JSON array.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use wavegen_backend::{generate, SampleBuffer, SynthError};
use wavegen_spec::{canonical_request_hash, validate_for_generate, Request};

use super::json_output::{
    error_codes, input_error_to_json, print_json, synth_error_to_json, validation_error_to_json,
    validation_warning_to_json, GenerateOutput, GenerateResult, JsonError, JsonWarning,
};
use super::reporting::{print_errors, print_warnings, short_hash};
use crate::input::{apply_overrides, load_request, LoadResult};

/// Exit code for a request that validated but failed to generate.
const EXIT_GENERATION_FAILED: u8 = 2;

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions<'a> {
    /// Sample rate override
    pub sample_rate: Option<u32>,
    /// Seed override
    pub seed: Option<u32>,
    /// Where to write the samples as a JSON array
    pub output: Option<&'a str>,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 on success, 1 for an invalid request, 2 if generation failed
pub fn run(request_path: &str, options: &GenerateOptions<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(request_path, options)
    } else {
        run_human(request_path, options)
    }
}

/// Writes samples to `path` as a JSON array.
pub fn write_samples(buffer: &SampleBuffer, path: &Path) -> Result<()> {
    let json = serde_json::to_string(buffer.samples()).context("Failed to serialize samples")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write samples to {}", path.display()))
}

fn exit_code_for(err: &SynthError) -> ExitCode {
    if err.is_invalid_parameter() {
        ExitCode::from(1)
    } else {
        ExitCode::from(EXIT_GENERATION_FAILED)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(request_path: &str, options: &GenerateOptions<'_>) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Generating:".cyan().bold(), request_path);

    let LoadResult {
        request,
        source_hash,
    } = load_request(Path::new(request_path))
        .with_context(|| format!("Failed to load request file: {}", request_path))?;
    let request = apply_overrides(request, options.sample_rate, options.seed);

    println!("{} {}", "Source:".dimmed(), short_hash(&source_hash));

    let warnings = match validate_for_generate(&request) {
        Ok(warnings) => warnings,
        Err(errors) => {
            print_errors(&errors);
            println!(
                "\n{} Request has {} error(s)",
                "FAILED".red().bold(),
                errors.len()
            );
            return Ok(ExitCode::from(1));
        }
    };
    print_warnings(&warnings);

    let buffer = match generate(&request) {
        Ok(buffer) => buffer,
        Err(e) => {
            println!("\n{} {}", "GENERATION FAILED".red().bold(), e);
            return Ok(exit_code_for(&e));
        }
    };

    if let Some(output) = options.output {
        write_samples(&buffer, Path::new(output))?;
        println!("{} {}", "Samples written to:".dimmed(), output);
    }

    print_summary(&request, &buffer);
    println!(
        "\n{} Generated {} samples ({}ms)",
        "SUCCESS".green().bold(),
        buffer.len(),
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(request_path: &str, options: &GenerateOptions<'_>) -> Result<ExitCode> {
    let start = Instant::now();

    let (request, source_hash) = match load_request(Path::new(request_path)) {
        Ok(LoadResult {
            request,
            source_hash,
        }) => (
            apply_overrides(request, options.sample_rate, options.seed),
            source_hash,
        ),
        Err(e) => {
            let error = input_error_to_json(&e, Some(request_path));
            print_json(&GenerateOutput::failure(vec![error], vec![], None, None))?;
            return Ok(ExitCode::from(1));
        }
    };

    let request_hash = canonical_request_hash(&request).ok();

    let warnings: Vec<JsonWarning> = match validate_for_generate(&request) {
        Ok(warnings) => warnings.iter().map(validation_warning_to_json).collect(),
        Err(errors) => {
            let errors: Vec<JsonError> = errors.iter().map(validation_error_to_json).collect();
            let output = GenerateOutput::failure(errors, vec![], request_hash, Some(source_hash));
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let buffer = match generate(&request) {
        Ok(buffer) => buffer,
        Err(e) => {
            let output = GenerateOutput::failure(
                vec![synth_error_to_json(&e)],
                warnings,
                request_hash,
                Some(source_hash),
            );
            print_json(&output)?;
            return Ok(exit_code_for(&e));
        }
    };

    if let Some(output) = options.output {
        if let Err(e) = write_samples(&buffer, Path::new(output)) {
            let error = JsonError::new(error_codes::OUTPUT_WRITE, format!("{:#}", e))
                .with_file(output);
            let output =
                GenerateOutput::failure(vec![error], warnings, request_hash, Some(source_hash));
            print_json(&output)?;
            return Ok(ExitCode::from(EXIT_GENERATION_FAILED));
        }
    }

    let result = GenerateResult {
        family: request.family.tag().to_string(),
        sample_rate: buffer.sample_rate(),
        samples: buffer.len(),
        peak: buffer.peak(),
        rms: buffer.rms(),
        pcm_hash: buffer.pcm_hash(),
        output: options.output.map(str::to_string),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    let output = GenerateOutput::success(
        result,
        request_hash.unwrap_or_else(|| "unknown".to_string()),
        source_hash,
        warnings,
    );
    print_json(&output).context("Failed to serialize generate output")?;
    Ok(ExitCode::SUCCESS)
}

fn print_summary(request: &Request, buffer: &SampleBuffer) {
    let request_hash =
        canonical_request_hash(request).unwrap_or_else(|_| "unknown".to_string());
    println!("\n{}", "Summary:".cyan().bold());
    println!("  {:<14} {}", "family", request.family);
    println!("  {:<14} {} Hz", "sample rate", buffer.sample_rate());
    println!(
        "  {:<14} {} ({:.3}s)",
        "samples",
        buffer.len(),
        buffer.duration_seconds()
    );
    println!("  {:<14} {:.6}", "peak", buffer.peak());
    println!("  {:<14} {:.6}", "rms", buffer.rms());
    println!("  {:<14} {}", "pcm hash", short_hash(&buffer.pcm_hash()));
    println!("  {:<14} {}", "request hash", short_hash(&request_hash));
}
