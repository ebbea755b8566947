//! Error types for request validation and processing.

use thiserror::Error;

/// Error codes for request validation.
///
/// Every code maps to an invalid caller parameter; none of them are transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Sample rate is zero
    InvalidSampleRate,
    /// E002: Duration is negative or not finite
    InvalidDuration,
    /// E003: Frequency is not positive for a pitched family
    InvalidFrequency,
    /// E004: Amplitude is not finite
    InvalidAmplitude,
    /// E005: Custom additive harmonic list is malformed
    InvalidHarmonics,
    /// E006: ADSR envelope segments are malformed or exceed the duration
    InvalidEnvelope,
    /// E007: Karplus-Strong feedback probability outside [0, 1]
    InvalidFeedbackProbability,
    /// E008: Karplus-Strong delay line shorter than one sample
    InvalidDelayLength,
    /// E009: Oscillator cycle shorter than one sample
    CycleTooShort,
    /// E010: FM operator parameter is not finite
    InvalidFmParams,
    /// E011: Request exceeds the sample budget
    BudgetExceeded,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSampleRate => "E001",
            ErrorCode::InvalidDuration => "E002",
            ErrorCode::InvalidFrequency => "E003",
            ErrorCode::InvalidAmplitude => "E004",
            ErrorCode::InvalidHarmonics => "E005",
            ErrorCode::InvalidEnvelope => "E006",
            ErrorCode::InvalidFeedbackProbability => "E007",
            ErrorCode::InvalidDelayLength => "E008",
            ErrorCode::CycleTooShort => "E009",
            ErrorCode::InvalidFmParams => "E010",
            ErrorCode::BudgetExceeded => "E011",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Family tag not recognized; generation yields an empty buffer
    UnknownFamily,
    /// W002: Fundamental at or above Nyquist; additive output is silent
    FundamentalAboveNyquist,
    /// W003: Request produces no samples
    EmptyOutput,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::UnknownFamily => "W001",
            WarningCode::FundamentalAboveNyquist => "W002",
            WarningCode::EmptyOutput => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "family.harmonics").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for request operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Canonicalization error.
    #[error("canonicalization error: {0}")]
    Canonicalization(String),
}

/// Result of request validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result.
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns true if a warning with the given code was recorded.
    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Returns true if an error with the given code was recorded.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Gives the CLI a uniform way to report failures from the synthesis backend
/// without the request crate depending on it.
pub trait BackendError: std::error::Error {
    /// Stable error code for reporting (e.g. "SYNTH_001").
    fn code(&self) -> &'static str;

    /// Human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category for grouping related errors.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::InvalidSampleRate.code(), "E001");
        assert_eq!(ErrorCode::InvalidDuration.code(), "E002");
        assert_eq!(ErrorCode::CycleTooShort.code(), "E009");
        assert_eq!(ErrorCode::InvalidFmParams.code(), "E010");
        assert_eq!(ErrorCode::BudgetExceeded.code(), "E011");
    }

    #[test]
    fn test_warning_codes() {
        assert_eq!(WarningCode::UnknownFamily.code(), "W001");
        assert_eq!(WarningCode::EmptyOutput.code(), "W003");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::InvalidSampleRate, "must be > 0");
        assert_eq!(err.to_string(), "E001: must be > 0");

        let err_with_path = ValidationError::with_path(
            ErrorCode::InvalidHarmonics,
            "expected 10 coefficients, got 3",
            "family.harmonics",
        );
        assert_eq!(
            err_with_path.to_string(),
            "E005: expected 10 coefficients, got 3 (at family.harmonics)"
        );
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());

        result.add_warning(ValidationWarning::new(WarningCode::EmptyOutput, "empty"));
        assert!(result.is_ok());
        assert!(result.has_warning(WarningCode::EmptyOutput));

        result.add_error(ValidationError::new(ErrorCode::InvalidDuration, "negative"));
        assert!(!result.is_ok());
        assert!(result.has_error(ErrorCode::InvalidDuration));
        assert_eq!(result.into_result().unwrap_err().len(), 1);
    }

    #[test]
    fn test_spec_error_display() {
        let err = SpecError::Canonicalization("NaN".to_string());
        assert_eq!(err.to_string(), "canonicalization error: NaN");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SpecError::from(json_err);
        assert!(matches!(err, SpecError::JsonParse(_)));
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
