//! Request validation logic.
//!
//! Validation never clamps: every out-of-range value is reported as an error
//! and left untouched. Errors carry the JSON path of the offending field.

pub mod budgets;
pub mod common;
mod family;


use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::request::{Family, Request};

pub use budgets::{BudgetError, SampleBudget};
pub use common::{
    validate_finite, validate_non_negative, validate_positive, validate_unit_interval,
    CommonValidationError,
};

/// Validates a request and returns a validation result.
///
/// # Returns
/// * `ValidationResult` with `ok=true` if validation passed, with any warnings.
/// * `ValidationResult` with `ok=false` and every error found otherwise.
///
/// # Example
/// ```
/// use wavegen_spec::{Family, Request};
/// use wavegen_spec::validation::validate_request;
///
/// let request = Request::builder(Family::SquareTime, 44100)
///     .frequency(440.0)
///     .duration(0.5)
///     .build();
/// assert!(validate_request(&request).is_ok());
///
/// let broken = Request::builder(Family::SquareTime, 0).build();
/// assert!(!validate_request(&broken).is_ok());
/// ```
pub fn validate_request(request: &Request) -> ValidationResult {
    let mut result = ValidationResult::default();

    let rate_ok = validate_sample_rate(request, &mut result);
    let duration_ok = validate_duration(request, &mut result);
    let frequency_ok = validate_frequency(request, &mut result);
    validate_amplitude(request, &mut result);

    if rate_ok && duration_ok {
        validate_budget(request, &SampleBudget::default(), &mut result);
    }

    if rate_ok && frequency_ok {
        validate_cycle_length(request, &mut result);
    }

    family::validate_family_params(request, rate_ok, duration_ok, frequency_ok, &mut result);

    if result.is_ok() {
        check_warnings(request, &mut result);
    }

    result
}

/// Validates a request for generation.
///
/// # Returns
/// * `Ok(warnings)` if the request can be generated
/// * `Err(errors)` otherwise
pub fn validate_for_generate(
    request: &Request,
) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
    validate_request(request).into_result()
}

fn validate_sample_rate(request: &Request, result: &mut ValidationResult) -> bool {
    if request.sample_rate == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            "sample_rate must be positive, got 0",
            "sample_rate",
        ));
        return false;
    }
    true
}

fn validate_duration(request: &Request, result: &mut ValidationResult) -> bool {
    if let Err(e) = validate_non_negative("duration_seconds", request.duration_seconds) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            e.to_string(),
            "duration_seconds",
        ));
        return false;
    }
    true
}

fn validate_frequency(request: &Request, result: &mut ValidationResult) -> bool {
    if !request.family.requires_frequency() {
        return true;
    }
    if let Err(e) = validate_positive("frequency", request.frequency) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFrequency,
            format!("{} ({} needs a pitched oscillator)", e, request.family),
            "frequency",
        ));
        return false;
    }
    true
}

fn validate_amplitude(request: &Request, result: &mut ValidationResult) {
    if let Err(e) = validate_finite("amplitude", request.amplitude) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            e.to_string(),
            "amplitude",
        ));
    }
}

fn validate_budget(request: &Request, budget: &SampleBudget, result: &mut ValidationResult) {
    if let Err(e) = budget.check(request.duration_seconds, request.sample_rate) {
        result.add_error(ValidationError::with_path(
            ErrorCode::BudgetExceeded,
            e.to_string(),
            "duration_seconds",
        ));
    }
}

/// Families that index by `i mod floor(sample_rate / frequency)` need at
/// least one whole sample per cycle.
fn validate_cycle_length(request: &Request, result: &mut ValidationResult) {
    if !request.family.uses_whole_cycle() {
        return;
    }
    let cycle = request.sample_rate as f64 / request.frequency;
    if cycle.floor() < 1.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::CycleTooShort,
            format!(
                "{} needs frequency <= sample_rate ({}), got {}",
                request.family, request.sample_rate, request.frequency
            ),
            "frequency",
        ));
    }
}

fn check_warnings(request: &Request, result: &mut ValidationResult) {
    if request.family == Family::Unknown {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::UnknownFamily,
            "unrecognized family; generation yields an empty buffer",
            "family.type",
        ));
        return;
    }

    if request.family.is_additive() && request.frequency >= request.nyquist() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::FundamentalAboveNyquist,
            format!(
                "frequency {} is at or above Nyquist ({}); output is silent",
                request.frequency,
                request.nyquist()
            ),
            "frequency",
        ));
    }

    let total = request.total_samples();
    if total == 0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::EmptyOutput,
            "sample_rate * duration_seconds is below one sample",
            "duration_seconds",
        ));
    } else if let Family::KarplusStrong(params) = &request.family {
        let delay = params.delay.resolve(request.sample_rate, request.frequency);
        if !params.include_seed_samples && total <= delay + 1 {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::EmptyOutput,
                format!(
                    "{} samples do not reach past the {}-sample seed region",
                    total,
                    delay + 1
                ),
                "duration_seconds",
            ));
        }
    }
}
