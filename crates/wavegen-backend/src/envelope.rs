//! ADSR envelope over a fixed-length buffer.
//!
//! The envelope is laid out against the whole buffer up front: attack and
//! decay run from the first sample, release occupies the trailing
//! `release_seconds * sample_rate` samples, and sustain fills the gap. Each
//! segment is a straight line, so the gain at any index is a pure function of
//! that index.

use wavegen_spec::AdsrParams;

use crate::oscillator::lerp;

/// Envelope segment containing a given sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    /// Rising from 0 to 1.
    Attack,
    /// Falling from 1 to the sustain level.
    Decay,
    /// Held at the sustain level.
    Sustain,
    /// Falling from the sustain level to 0.
    Release,
}

/// Piecewise-linear ADSR gain over `total_samples` samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrEnvelope {
    attack: f64,
    decay: f64,
    sustain: f64,
    release: f64,
    release_start: f64,
}

impl AdsrEnvelope {
    /// Lays out the envelope for a buffer of `total_samples` samples.
    ///
    /// Segment lengths are kept in fractional samples.
    pub fn new(params: &AdsrParams, sample_rate: f64, total_samples: usize) -> Self {
        let release = params.release_seconds * sample_rate;
        Self {
            attack: params.attack_seconds * sample_rate,
            decay: params.decay_seconds * sample_rate,
            sustain: params.sustain_level,
            release,
            release_start: total_samples as f64 - release,
        }
    }

    /// Returns the stage that sample `index` falls in.
    pub fn stage(&self, index: usize) -> EnvelopeStage {
        let x = index as f64;
        if self.attack > 0.0 && x <= self.attack {
            EnvelopeStage::Attack
        } else if self.decay > 0.0 && x <= self.attack + self.decay {
            EnvelopeStage::Decay
        } else if x <= self.release_start {
            EnvelopeStage::Sustain
        } else {
            EnvelopeStage::Release
        }
    }

    /// Gain at sample `index`.
    pub fn gain(&self, index: usize) -> f64 {
        let x = index as f64;
        match self.stage(index) {
            EnvelopeStage::Attack => lerp(0.0, 1.0, x / self.attack),
            EnvelopeStage::Decay => lerp(1.0, self.sustain, (x - self.attack) / self.decay),
            EnvelopeStage::Sustain => self.sustain,
            EnvelopeStage::Release => {
                lerp(self.sustain, 0.0, (x - self.release_start) / self.release)
            }
        }
    }

    /// Gains for the first `num_samples` samples.
    pub fn render(&self, num_samples: usize) -> Vec<f64> {
        (0..num_samples).map(|i| self.gain(i)).collect()
    }
}
