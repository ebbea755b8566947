//! Two-operator FM synthesis.
//!
//! A single sine modulator is added to the carrier's phase. When an ADSR
//! envelope is present it scales the modulation depth, not the output level,
//! so the timbre opens and closes with the envelope while the carrier keeps
//! sounding.

use rand::RngCore;

use super::Synthesizer;
use crate::envelope::AdsrEnvelope;
use crate::oscillator::{sine, time_at, TWO_PI};

/// FM synthesis parameters with frequencies already resolved to Hz.
#[derive(Debug, Clone)]
pub struct FmSynth {
    /// Carrier frequency in Hz.
    pub carrier_frequency: f64,
    /// Carrier amplitude.
    pub carrier_amplitude: f64,
    /// Modulator frequency in Hz.
    pub modulation_frequency: f64,
    /// Modulation depth in radians.
    pub modulation_amplitude: f64,
    /// Output scale.
    pub amplitude: f64,
    /// Optional envelope on the modulation depth.
    pub envelope: Option<AdsrEnvelope>,
}

impl FmSynth {
    /// Creates an FM synthesizer without an envelope.
    pub fn new(
        carrier_frequency: f64,
        carrier_amplitude: f64,
        modulation_frequency: f64,
        modulation_amplitude: f64,
        amplitude: f64,
    ) -> Self {
        Self {
            carrier_frequency,
            carrier_amplitude,
            modulation_frequency,
            modulation_amplitude,
            amplitude,
            envelope: None,
        }
    }

    /// Sets the modulation envelope.
    pub fn with_envelope(mut self, envelope: AdsrEnvelope) -> Self {
        self.envelope = Some(envelope);
        self
    }

    fn gain(&self, index: usize) -> f64 {
        self.envelope.as_ref().map_or(1.0, |env| env.gain(index))
    }
}

impl Synthesizer for FmSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        let scale = self.amplitude * self.carrier_amplitude;
        (0..num_samples)
            .map(|i| {
                let t = time_at(i, sample_rate);
                let modulator = self.gain(i)
                    * self.modulation_amplitude
                    * sine(TWO_PI * self.modulation_frequency * t);
                scale * sine(TWO_PI * self.carrier_frequency * t + modulator)
            })
            .collect()
    }
}
