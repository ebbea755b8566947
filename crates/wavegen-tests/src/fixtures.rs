//! Request fixtures.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use wavegen_spec::{
    AdsrParams, CustomAdditiveParams, Excitation, Family, FmParams, KarplusDelay,
    KarplusStrongParams, Request,
};

/// A temporary directory holding request files.
pub struct RequestFixture {
    root: TempDir,
}

impl RequestFixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Path of `name` inside the fixture directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Writes a request as pretty JSON and returns its path.
    pub fn add_request(&self, name: &str, request: &Request) -> PathBuf {
        let json = request
            .to_json_pretty()
            .expect("Failed to serialize request");
        self.add_raw(name, &json)
    }

    /// Writes raw file content and returns its path.
    pub fn add_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("Failed to write request file");
        path
    }
}

impl Default for RequestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// One request per family with non-default parameters, at 22.05 kHz.
pub fn all_family_requests() -> Vec<Request> {
    let families = vec![
        Family::SineTime,
        Family::SquareTime,
        Family::SawtoothTime,
        Family::RepeatingNarrowPulse,
        Family::SquareAdditive,
        Family::SawtoothAdditive,
        Family::TriangleAdditive,
        Family::CustomizedAdditiveSynthesis(CustomAdditiveParams::new(vec![
            1.0, 0.5, 0.33, 0.25, 0.2, 0.16, 0.14, 0.12, 0.11, 0.1,
        ])),
        Family::WhiteNoise,
        Family::KarplusStrong(KarplusStrongParams {
            base_excitation: Excitation::WhiteNoise,
            feedback_probability: 0.98,
            delay: KarplusDelay::FromFrequency,
            include_seed_samples: false,
        }),
        Family::KarplusStrong(KarplusStrongParams {
            base_excitation: Excitation::Sawtooth,
            feedback_probability: 0.5,
            delay: KarplusDelay::Samples(64),
            include_seed_samples: true,
        }),
        Family::Fm(FmParams {
            carrier_frequency: 1.0,
            carrier_amplitude: 0.8,
            modulation_frequency: 3.5,
            modulation_amplitude: 2.0,
            use_frequency_as_multiplier: true,
            adsr: Some(AdsrParams::new(0.02, 0.05, 0.6, 0.1)),
        }),
    ];

    families
        .into_iter()
        .map(|family| {
            Request::builder(family, 22050)
                .frequency(220.0)
                .amplitude(0.7)
                .duration(0.25)
                .seed(1234)
                .build()
        })
        .collect()
}
