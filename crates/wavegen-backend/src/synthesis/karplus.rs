//! Karplus-Strong plucked string synthesis.
//!
//! The first `delay + 1` samples are the excitation (noise burst or
//! sawtooth). After that each sample is the average of the two samples
//! `delay` and `delay + 1` positions back, with its sign flipped at random
//! with probability `1 - feedback_probability`. The sign flips are what give
//! the decay its drum-like or string-like character.
//!
//! The excitation is not part of the output unless `include_seed_samples` is
//! set, so by default a buffer of `n` samples yields `n - (delay + 1)`.

use rand::{Rng, RngCore};
use wavegen_spec::Excitation;

use super::Synthesizer;
use crate::oscillator::Cycle;

/// Karplus-Strong synthesis parameters.
#[derive(Debug, Clone)]
pub struct KarplusStrong {
    /// Pitch in Hz. Drives the sawtooth excitation.
    pub frequency: f64,
    /// Output scale.
    pub amplitude: f64,
    /// Probability of keeping the averaged sample's sign.
    pub feedback_probability: f64,
    /// Delay length in samples.
    pub delay: usize,
    /// Initial excitation.
    pub excitation: Excitation,
    /// Emit the excitation samples as well as the recurrence.
    pub include_seed_samples: bool,
}

impl KarplusStrong {
    /// Creates a Karplus-Strong generator with a noise excitation.
    pub fn new(frequency: f64, amplitude: f64, delay: usize, feedback_probability: f64) -> Self {
        Self {
            frequency,
            amplitude,
            feedback_probability,
            delay,
            excitation: Excitation::WhiteNoise,
            include_seed_samples: false,
        }
    }

    /// Sets the excitation.
    pub fn with_excitation(mut self, excitation: Excitation) -> Self {
        self.excitation = excitation;
        self
    }

    /// Emits the excitation samples too.
    pub fn with_seed_samples(mut self, include: bool) -> Self {
        self.include_seed_samples = include;
        self
    }

    /// Number of samples produced for a buffer of `num_samples`.
    pub fn output_len(&self, num_samples: usize) -> usize {
        if self.include_seed_samples {
            num_samples
        } else {
            num_samples.saturating_sub(self.delay.saturating_add(1))
        }
    }
}

impl Synthesizer for KarplusStrong {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        let mut output = Vec::with_capacity(self.output_len(num_samples));

        // Ring holding the last delay + 1 samples. Slot i % len holds s[i - len]
        // before sample i is written.
        let len = self.delay.saturating_add(1).min(num_samples).max(1);
        let mut line = vec![0.0; len];
        let cycle = Cycle::new(sample_rate, self.frequency);

        for i in 0..num_samples {
            let pos = i % len;
            if i <= self.delay {
                let seed = match self.excitation {
                    Excitation::WhiteNoise => rng.gen::<f64>() * 2.0 - 1.0,
                    Excitation::Sawtooth => cycle.sawtooth(i),
                };
                line[pos] = seed;
                if self.include_seed_samples {
                    output.push(self.amplitude * seed);
                }
            } else {
                let oldest = line[pos];
                let newer = line[(pos + 1) % len];
                let avg = 0.5 * (newer + oldest);
                let r: f64 = rng.gen();
                let sample = if r < self.feedback_probability { avg } else { -avg };
                line[pos] = sample;
                output.push(self.amplitude * sample);
            }
        }

        output
    }
}
