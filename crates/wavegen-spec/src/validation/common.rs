//! Common validation utilities shared by the request checks.

use std::fmt;

/// Error type for common validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

/// Validate that a value is finite (not NaN or infinite).
///
/// # Example
/// ```
/// use wavegen_spec::validation::common::validate_finite;
///
/// assert!(validate_finite("amplitude", -3.0).is_ok());
/// assert!(validate_finite("amplitude", f64::NAN).is_err());
/// ```
pub fn validate_finite(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is in [0, 1] (the unit interval).
///
/// # Example
/// ```
/// use wavegen_spec::validation::common::validate_unit_interval;
///
/// assert!(validate_unit_interval("sustain_level", 0.5).is_ok());
/// assert!(validate_unit_interval("sustain_level", 1.5).is_err());
/// ```
pub fn validate_unit_interval(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(CommonValidationError::new(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is positive (> 0).
///
/// # Example
/// ```
/// use wavegen_spec::validation::common::validate_positive;
///
/// assert!(validate_positive("frequency", 440.0).is_ok());
/// assert!(validate_positive("frequency", 0.0).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value <= 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is non-negative (>= 0).
///
/// # Example
/// ```
/// use wavegen_spec::validation::common::validate_non_negative;
///
/// assert!(validate_non_negative("duration_seconds", 0.0).is_ok());
/// assert!(validate_non_negative("duration_seconds", -1.0).is_err());
/// ```
pub fn validate_non_negative(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value < 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}
