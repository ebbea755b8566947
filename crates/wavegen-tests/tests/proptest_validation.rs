//! Property-based validation tests for wavegen using proptest.
//!
//! These tests check that validation never panics on arbitrary input and
//! that the accept/reject boundary sits exactly where the checks say.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavegen-tests --test proptest_validation
//! ```

use proptest::prelude::*;

use wavegen_spec::validation::common::{
    validate_finite, validate_non_negative, validate_positive, validate_unit_interval,
};
use wavegen_spec::{
    canonical_request_hash, validate_request, AdsrParams, CustomAdditiveParams, ErrorCode,
    Family, FmParams, KarplusDelay, KarplusStrongParams, Request, CUSTOM_HARMONIC_COUNT,
};

/// Any f64, including NaN, infinities and subnormals.
fn any_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop::num::f64::ANY,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(0.0),
        Just(-0.0),
        -10.0f64..10.0,
    ]
}

fn simple_family() -> impl Strategy<Value = Family> {
    prop_oneof![
        Just(Family::SineTime),
        Just(Family::SquareTime),
        Just(Family::SawtoothTime),
        Just(Family::RepeatingNarrowPulse),
        Just(Family::SquareAdditive),
        Just(Family::SawtoothAdditive),
        Just(Family::TriangleAdditive),
        Just(Family::WhiteNoise),
        Just(Family::Unknown),
    ]
}

fn has_error(request: &Request, code: ErrorCode) -> bool {
    validate_request(request).errors.iter().any(|e| e.code == code)
}

// ============================================================================
// 1. Common Validators
// ============================================================================

proptest! {
    /// Finite check agrees with f64::is_finite.
    #[test]
    fn finite_matches_std(x in any_f64()) {
        prop_assert_eq!(validate_finite("x", x).is_ok(), x.is_finite());
    }

    /// Positive accepts exactly the finite values above zero.
    #[test]
    fn positive_boundary(x in any_f64()) {
        prop_assert_eq!(validate_positive("x", x).is_ok(), x.is_finite() && x > 0.0);
    }

    /// Non-negative accepts zero and every finite value above it.
    #[test]
    fn non_negative_boundary(x in any_f64()) {
        prop_assert_eq!(
            validate_non_negative("x", x).is_ok(),
            x.is_finite() && x >= 0.0
        );
    }

    /// Unit interval is closed on both ends.
    #[test]
    fn unit_interval_boundary(x in any_f64()) {
        prop_assert_eq!(
            validate_unit_interval("x", x).is_ok(),
            (0.0..=1.0).contains(&x)
        );
    }

    /// Error messages name the field.
    #[test]
    fn errors_name_the_field(name in "[a-z_]{1,20}") {
        let err = validate_positive(&name, -1.0).unwrap_err();
        prop_assert!(err.message.contains(&name));
    }
}

// ============================================================================
// 2. Request Validation Never Panics
// ============================================================================

proptest! {
    /// Arbitrary scalar fields never panic the validator.
    #[test]
    fn request_validation_never_panics(
        family in simple_family(),
        frequency in any_f64(),
        amplitude in any_f64(),
        duration in any_f64(),
        sample_rate in any::<u32>(),
        seed in any::<u32>(),
    ) {
        let request = Request::builder(family, sample_rate)
            .frequency(frequency)
            .amplitude(amplitude)
            .duration(duration)
            .seed(seed)
            .build();
        let result = validate_request(&request);
        prop_assert_eq!(result.ok, result.errors.is_empty());
    }

    /// Arbitrary Karplus-Strong and FM parameters never panic the validator.
    #[test]
    fn parameterized_validation_never_panics(
        b in any_f64(),
        delay in any::<u32>(),
        fm in prop::array::uniform4(any_f64()),
        adsr in prop::array::uniform4(any_f64()),
        frequency in any_f64(),
        sample_rate in any::<u32>(),
    ) {
        let karplus = Family::KarplusStrong(KarplusStrongParams {
            feedback_probability: b,
            delay: KarplusDelay::Samples(delay),
            ..KarplusStrongParams::default()
        });
        let fm = Family::Fm(FmParams {
            carrier_frequency: fm[0],
            carrier_amplitude: fm[1],
            modulation_frequency: fm[2],
            modulation_amplitude: fm[3],
            use_frequency_as_multiplier: true,
            adsr: Some(AdsrParams::new(adsr[0], adsr[1], adsr[2], adsr[3])),
        });
        for family in [karplus, fm] {
            let request = Request::builder(family, sample_rate)
                .frequency(frequency)
                .duration(1.0)
                .build();
            let _ = validate_request(&request);
        }
    }

    /// Arbitrary text never panics the JSON parser.
    #[test]
    fn request_parsing_never_panics(s in "\\PC{0,200}") {
        let _ = Request::from_json(&s);
    }

    /// Custom coefficient lists of the wrong length are rejected.
    #[test]
    fn custom_harmonic_count_enforced(coefficients in prop::collection::vec(-1.0f64..1.0, 0..20)) {
        let len = coefficients.len();
        let family = Family::CustomizedAdditiveSynthesis(CustomAdditiveParams::new(coefficients));
        let request = Request::builder(family, 8000).frequency(100.0).build();
        prop_assert_eq!(
            has_error(&request, ErrorCode::InvalidHarmonics),
            len != CUSTOM_HARMONIC_COUNT
        );
    }
}

// ============================================================================
// 3. Family Boundaries
// ============================================================================

proptest! {
    /// Feedback probability is accepted exactly on [0, 1].
    #[test]
    fn feedback_probability_boundary(b in any_f64()) {
        let family = Family::KarplusStrong(KarplusStrongParams {
            feedback_probability: b,
            delay: KarplusDelay::Samples(10),
            ..KarplusStrongParams::default()
        });
        let request = Request::builder(family, 8000).frequency(100.0).build();
        prop_assert_eq!(
            has_error(&request, ErrorCode::InvalidFeedbackProbability),
            !(0.0..=1.0).contains(&b)
        );
    }

    /// Whole-cycle families need at least one sample per period.
    #[test]
    fn cycle_length_boundary(sample_rate in 1u32..48000, frequency in 1.0f64..100_000.0) {
        let request = Request::builder(Family::SquareTime, sample_rate)
            .frequency(frequency)
            .build();
        let too_short = (sample_rate as f64 / frequency).floor() < 1.0;
        prop_assert_eq!(has_error(&request, ErrorCode::CycleTooShort), too_short);
    }

    /// Sine has no whole-cycle requirement.
    #[test]
    fn sine_accepts_any_positive_frequency(sample_rate in 1u32..48000, frequency in 1.0f64..100_000.0) {
        let request = Request::builder(Family::SineTime, sample_rate)
            .frequency(frequency)
            .build();
        prop_assert!(validate_request(&request).is_ok());
    }

    /// Durations past the budget fail validation instead of allocating.
    #[test]
    fn oversized_duration_rejected(family in simple_family(), duration in 601.0f64..1e300) {
        let request = Request::builder(family, 8000).duration(duration).build();
        prop_assert!(has_error(&request, ErrorCode::BudgetExceeded));
    }

    /// A zero sample rate is always an error, whatever else is set.
    #[test]
    fn zero_sample_rate_rejected(family in simple_family(), frequency in 1.0f64..1000.0) {
        let request = Request::builder(family, 0).frequency(frequency).build();
        prop_assert!(has_error(&request, ErrorCode::InvalidSampleRate));
    }
}

// ============================================================================
// 4. Canonical Hash
// ============================================================================

proptest! {
    /// The request hash survives a JSON round trip.
    #[test]
    fn canonical_hash_stable_across_round_trip(
        family in simple_family(),
        frequency in (1u32..20000).prop_map(f64::from),
        amplitude in (-200i32..200).prop_map(|x| f64::from(x) / 100.0),
        seed in any::<u32>(),
    ) {
        let request = Request::builder(family, 44100)
            .frequency(frequency)
            .amplitude(amplitude)
            .seed(seed)
            .build();
        let parsed = Request::from_json(&request.to_json_pretty().unwrap()).unwrap();
        prop_assert_eq!(
            canonical_request_hash(&request).unwrap(),
            canonical_request_hash(&parsed).unwrap()
        );
    }

    /// Different seeds hash differently.
    #[test]
    fn canonical_hash_covers_seed(a in any::<u32>(), b in any::<u32>()) {
        prop_assume!(a != b);
        let base = Request::builder(Family::WhiteNoise, 8000).build();
        prop_assert_ne!(
            canonical_request_hash(&base.clone().with_seed(a)).unwrap(),
            canonical_request_hash(&base.with_seed(b)).unwrap()
        );
    }
}
