//! Error types for the synthesis backend.

use thiserror::Error;
use wavegen_spec::{BackendError, ValidationError};

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur during generation.
///
/// Every variant is a caller-input problem; nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid request parameter.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name (JSON path when known).
        name: String,
        /// Error message.
        message: String,
    },

    /// Internal synthesis error.
    #[error("synthesis error: {message}")]
    Synthesis {
        /// Error message.
        message: String,
    },
}

impl SynthError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a synthesis error.
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }

    /// Builds an invalid parameter error from validation failures.
    ///
    /// The first error names the parameter; the rest are counted in the
    /// message.
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        let Some(first) = errors.first() else {
            return Self::invalid_param("request", "validation failed");
        };

        let name = first
            .path
            .clone()
            .unwrap_or_else(|| first.code.to_string());
        let mut message = format!("{}: {}", first.code, first.message);
        if errors.len() > 1 {
            message.push_str(&format!(" (and {} more)", errors.len() - 1));
        }
        Self::InvalidParameter { name, message }
    }

    /// Returns true for caller-input validation failures.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SynthError::InvalidParameter { .. })
    }
}

impl BackendError for SynthError {
    fn code(&self) -> &'static str {
        match self {
            SynthError::InvalidParameter { .. } => "SYNTH_001",
            SynthError::Synthesis { .. } => "SYNTH_002",
        }
    }

    fn category(&self) -> &'static str {
        "synthesis"
    }
}
