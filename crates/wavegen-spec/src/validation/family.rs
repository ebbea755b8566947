//! Family parameter validation.

use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::request::{
    AdsrParams, CustomAdditiveParams, Family, FmParams, KarplusDelay, KarplusStrongParams,
    Request, CUSTOM_HARMONIC_COUNT,
};
use crate::validation::{validate_finite, validate_non_negative, validate_unit_interval};

/// Slack when comparing summed envelope seconds against the duration, so
/// that e.g. 0.1 + 0.2 + 0.3 still fits in 0.6 seconds.
const ENVELOPE_EPSILON: f64 = 1e-9;

pub(super) fn validate_family_params(
    request: &Request,
    rate_ok: bool,
    duration_ok: bool,
    frequency_ok: bool,
    result: &mut ValidationResult,
) {
    match &request.family {
        Family::CustomizedAdditiveSynthesis(params) => validate_custom_additive(params, result),
        Family::KarplusStrong(params) => {
            validate_karplus(request, params, rate_ok && frequency_ok, result)
        }
        Family::Fm(params) => validate_fm(request, params, duration_ok, result),
        Family::SineTime
        | Family::SquareTime
        | Family::SawtoothTime
        | Family::RepeatingNarrowPulse
        | Family::SquareAdditive
        | Family::SawtoothAdditive
        | Family::TriangleAdditive
        | Family::WhiteNoise
        | Family::Unknown => {}
    }
}

fn validate_custom_additive(params: &CustomAdditiveParams, result: &mut ValidationResult) {
    if params.harmonics.len() != CUSTOM_HARMONIC_COUNT {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidHarmonics,
            format!(
                "expected {} harmonic coefficients, got {}",
                CUSTOM_HARMONIC_COUNT,
                params.harmonics.len()
            ),
            "family.harmonics",
        ));
    }

    for (i, &coefficient) in params.harmonics.iter().enumerate() {
        if let Err(e) = validate_finite("harmonic coefficient", coefficient) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidHarmonics,
                e.to_string(),
                format!("family.harmonics[{}]", i),
            ));
        }
    }
}

fn validate_karplus(
    request: &Request,
    params: &KarplusStrongParams,
    pitch_ok: bool,
    result: &mut ValidationResult,
) {
    if let Err(e) = validate_unit_interval("feedback_probability", params.feedback_probability) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFeedbackProbability,
            e.to_string(),
            "family.feedback_probability",
        ));
    }

    match params.delay {
        KarplusDelay::Samples(0) => {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidDelayLength,
                "delay must be at least 1 sample, got 0",
                "family.delay.samples",
            ));
        }
        KarplusDelay::Samples(_) => {}
        KarplusDelay::FromFrequency => {
            // An unusable rate or frequency is already reported on its own.
            if pitch_ok && params.delay.resolve(request.sample_rate, request.frequency) == 0 {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidDelayLength,
                    format!(
                        "derived delay floor({} / {}) is shorter than 1 sample",
                        request.sample_rate, request.frequency
                    ),
                    "family.delay",
                ));
            }
        }
    }
}

fn validate_fm(
    request: &Request,
    params: &FmParams,
    duration_ok: bool,
    result: &mut ValidationResult,
) {
    let operators = [
        ("carrier_frequency", params.carrier_frequency),
        ("carrier_amplitude", params.carrier_amplitude),
        ("modulation_frequency", params.modulation_frequency),
        ("modulation_amplitude", params.modulation_amplitude),
    ];
    for (name, value) in operators {
        if let Err(e) = validate_finite(name, value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidFmParams,
                e.to_string(),
                format!("family.{}", name),
            ));
        }
    }

    if let Some(ref adsr) = params.adsr {
        validate_adsr(request, adsr, duration_ok, result);
    }
}

fn validate_adsr(
    request: &Request,
    adsr: &AdsrParams,
    duration_ok: bool,
    result: &mut ValidationResult,
) {
    let segments = [
        ("attack_seconds", adsr.attack_seconds),
        ("decay_seconds", adsr.decay_seconds),
        ("release_seconds", adsr.release_seconds),
    ];
    let mut segments_ok = true;
    for (name, value) in segments {
        if let Err(e) = validate_non_negative(name, value) {
            segments_ok = false;
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidEnvelope,
                e.to_string(),
                format!("family.adsr.{}", name),
            ));
        }
    }

    if let Err(e) = validate_unit_interval("sustain_level", adsr.sustain_level) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidEnvelope,
            e.to_string(),
            "family.adsr.sustain_level",
        ));
    }

    if segments_ok && duration_ok {
        let timed = adsr.timed_seconds();
        if timed > request.duration_seconds + ENVELOPE_EPSILON {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidEnvelope,
                format!(
                    "attack + decay + release ({}) exceeds duration_seconds ({})",
                    timed, request.duration_seconds
                ),
                "family.adsr",
            ));
        }
    }
}
