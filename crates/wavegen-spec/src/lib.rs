//! wavegen Request Library
//!
//! This crate provides the request model, validation, and canonical hashing
//! for wavegen synthesis requests. A request is a plain-data description of a
//! waveform: which family to synthesize, at what pitch, amplitude, duration,
//! and sample rate, plus the parameters that family needs.
//!
//! # Example
//!
//! ```
//! use wavegen_spec::{AdsrParams, Family, FmParams, Request};
//! use wavegen_spec::validation::validate_request;
//! use wavegen_spec::hash::canonical_request_hash;
//!
//! let fm = FmParams {
//!     adsr: Some(AdsrParams::new(0.05, 0.1, 0.6, 0.2)),
//!     ..FmParams::default()
//! };
//! let request = Request::builder(Family::Fm(fm), 44100)
//!     .frequency(220.0)
//!     .amplitude(0.8)
//!     .duration(1.0)
//!     .build();
//!
//! let result = validate_request(&request);
//! assert!(result.is_ok());
//!
//! let hash = canonical_request_hash(&request).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`request`]: Request, family, and family parameter types
//! - [`validation`]: Request validation functions
//! - [`hash`]: Canonical hashing

pub mod error;
pub mod hash;
pub mod request;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::{blake3_hash, canonical_request_hash, canonical_value_hash};
pub use request::{
    AdsrParams, CustomAdditiveParams, Excitation, Family, FmParams, KarplusDelay,
    KarplusStrongParams, Request, RequestBuilder, CUSTOM_HARMONIC_COUNT,
};
pub use validation::{validate_for_generate, validate_request};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_parse_and_validate_custom_additive() {
        let json = r#"{
            "family": {
                "type": "customized-additive-synthesis",
                "harmonics": [1.0, 0.5, 0.33, 0.25, 0.2, 0.0, 0.0, 0.0, 0.0, 0.1]
            },
            "frequency": 110.0,
            "amplitude": 0.3,
            "duration_seconds": 2.0,
            "sample_rate": 22050,
            "seed": 3
        }"#;

        let request = Request::from_json(json).expect("should parse");
        assert_eq!(request.family.tag(), "customized-additive-synthesis");
        assert_eq!(request.total_samples(), 44100);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_invalid_json_reports_spec_error() {
        let err: SpecError = Request::from_json("{").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
