//! Generators for each waveform family.
//!
//! - `oscillators` - sine, square, sawtooth and narrow pulse computed in the time domain
//! - `harmonics` - square, sawtooth, triangle and custom additive series
//! - `noise` - white noise
//! - `karplus` - Karplus-Strong plucked string recurrence
//! - `fm` - two-operator FM with an optional ADSR on the modulation depth

pub mod fm;
pub mod harmonics;
pub mod karplus;
pub mod noise;
pub mod oscillators;

use rand::RngCore;

/// Common trait for all waveform generators.
pub trait Synthesizer {
    /// Generates up to `num_samples` samples at `sample_rate`.
    ///
    /// Deterministic generators ignore `rng`. Stochastic ones draw from it
    /// and never from any other source, so a pinned RNG pins the output.
    /// Karplus-Strong may return fewer than `num_samples` samples.
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut dyn RngCore) -> Vec<f64>;
}

pub use fm::FmSynth;
pub use harmonics::{AdditiveSynth, Basis, HarmonicSeries, Partial, MAX_HARMONICS};
pub use karplus::KarplusStrong;
pub use noise::WhiteNoise;
pub use oscillators::{NarrowPulseSynth, SawSynth, SineSynth, SquareSynth};
