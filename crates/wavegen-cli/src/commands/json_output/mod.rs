//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`. The output always carries `success`,
//! `errors` and `warnings`; `result` is present on success.

mod convert;
mod records;

pub use convert::{
    input_error_to_json, synth_error_to_json, validation_error_to_json,
    validation_warning_to_json,
};
pub use records::{
    GenerateOutput, GenerateResult, TemplateOutput, ValidateOutput, ValidateResult,
};

use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable. Validation failures pass through their `E0xx`
/// codes unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Unknown family tag
    pub const UNKNOWN_FAMILY: &str = "CLI_004";
    /// Output file could not be written
    pub const OUTPUT_WRITE: &str = "CLI_005";
    /// Generation error (wraps backend errors)
    pub const GENERATION_ERROR: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Prints any serializable output as pretty JSON on stdout.
pub fn print_json<T: Serialize>(output: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(output)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_serialization() {
        let error = JsonError::new("E005", "harmonics must have 10 entries")
            .with_path("family.harmonics")
            .with_file("custom.json");

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"E005\""));
        assert!(json.contains("\"path\":\"family.harmonics\""));
        assert!(json.contains("\"file\":\"custom.json\""));
    }

    #[test]
    fn test_optional_fields_skipped() {
        let error = JsonError::new("CLI_001", "missing");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("\"path\""));
        assert!(!json.contains("\"file\""));

        let warning = JsonWarning::new("W001", "unknown family");
        let json = serde_json::to_string(&warning).unwrap();
        assert!(!json.contains("\"path\""));
    }
}
