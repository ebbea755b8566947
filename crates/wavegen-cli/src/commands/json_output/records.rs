//! Output record types for the CLI commands.

use serde::{Deserialize, Serialize};

use super::{JsonError, JsonWarning};

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Validation result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidateResult>,
    /// Canonical request hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Validation result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Family tag
    pub family: String,
    /// Sample rate after overrides
    pub sample_rate: u32,
    /// Nominal sample count, `floor(sample_rate * duration_seconds)`
    pub total_samples: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ValidateOutput {
    /// Creates a successful validate output.
    pub fn success(
        result: ValidateResult,
        request_hash: String,
        source_hash: String,
        warnings: Vec<JsonWarning>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            request_hash: Some(request_hash),
            source_hash: Some(source_hash),
        }
    }

    /// Creates a failed validate output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        request_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            request_hash,
            source_hash,
        }
    }
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered during validation or generation
    pub errors: Vec<JsonError>,
    /// Warnings from validation
    pub warnings: Vec<JsonWarning>,
    /// Generation result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
    /// Canonical request hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Generation result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Family tag
    pub family: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of samples produced
    pub samples: usize,
    /// Peak absolute sample value
    pub peak: f64,
    /// Root mean square
    pub rms: f64,
    /// BLAKE3 hash of the sample data
    pub pcm_hash: String,
    /// Path the samples were written to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(
        result: GenerateResult,
        request_hash: String,
        source_hash: String,
        warnings: Vec<JsonWarning>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            request_hash: Some(request_hash),
            source_hash: Some(source_hash),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        request_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            request_hash,
            source_hash,
        }
    }
}

/// JSON output for the `template` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateOutput {
    /// Whether a template exists for the family
    pub success: bool,
    /// Errors (unknown family)
    pub errors: Vec<JsonError>,
    /// The starter request (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

impl TemplateOutput {
    /// Creates a successful template output.
    pub fn success(request: serde_json::Value) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(request),
        }
    }

    /// Creates a failed template output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}
