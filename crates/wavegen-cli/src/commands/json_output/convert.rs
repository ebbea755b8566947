//! Conversion helpers for transforming errors and warnings to JSON format.

use wavegen_backend::SynthError;
use wavegen_spec::{BackendError, ValidationError, ValidationWarning};

use super::{error_codes, JsonError, JsonWarning};
use crate::input::InputError;

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &InputError, file: Option<&str>) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
    };

    let mut error = JsonError::new(code, err.to_string());
    if let Some(f) = file {
        error = error.with_file(f);
    }
    error
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}

/// Converts a backend error to a JsonError, keeping the backend code in the
/// message.
pub fn synth_error_to_json(err: &SynthError) -> JsonError {
    let error = JsonError::new(
        error_codes::GENERATION_ERROR,
        format!("[{}] {}", err.code(), err.message()),
    );
    match err {
        SynthError::InvalidParameter { name, .. } => error.with_path(name),
        SynthError::Synthesis { .. } => error,
    }
}
