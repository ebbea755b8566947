//! Time-domain oscillators.
//!
//! Each sample is a closed-form function of its index. Square, sawtooth and
//! pulse use integer cycle positions from [`Cycle`], so their period is
//! `floor(sample_rate / frequency)` samples.

use rand::RngCore;

use super::Synthesizer;
use crate::oscillator::{sine, time_at, Cycle, TWO_PI};

/// Sine wave: `amplitude * sin(2 pi f t)`.
#[derive(Debug, Clone)]
pub struct SineSynth {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl SineSynth {
    /// Creates a sine oscillator.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for SineSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        (0..num_samples)
            .map(|i| self.amplitude * sine(TWO_PI * self.frequency * time_at(i, sample_rate)))
            .collect()
    }
}

/// Square wave: `+amplitude` for the first half of each cycle, `-amplitude`
/// for the rest.
#[derive(Debug, Clone)]
pub struct SquareSynth {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl SquareSynth {
    /// Creates a square oscillator.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for SquareSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        let cycle = Cycle::new(sample_rate, self.frequency);
        (0..num_samples)
            .map(|i| {
                if cycle.in_first_half(i) {
                    self.amplitude
                } else {
                    -self.amplitude
                }
            })
            .collect()
    }
}

/// Falling sawtooth from `+amplitude` at the start of each cycle.
#[derive(Debug, Clone)]
pub struct SawSynth {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl SawSynth {
    /// Creates a sawtooth oscillator.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for SawSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        let cycle = Cycle::new(sample_rate, self.frequency);
        (0..num_samples)
            .map(|i| self.amplitude * cycle.sawtooth(i))
            .collect()
    }
}

/// Two-sample pulse per cycle: `+amplitude` then `-amplitude`, silence
/// elsewhere.
#[derive(Debug, Clone)]
pub struct NarrowPulseSynth {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl NarrowPulseSynth {
    /// Creates a narrow pulse oscillator.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for NarrowPulseSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        let cycle = Cycle::new(sample_rate, self.frequency);
        (0..num_samples)
            .map(|i| match cycle.phase_index(i) {
                0 => self.amplitude,
                // a one-sample cycle never reaches index 1
                1 => -self.amplitude,
                _ => 0.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sine_starts_at_zero() {
        let mut rng = create_rng(0);
        let samples = SineSynth::new(440.0, 0.5).synthesize(100, 44100.0, &mut rng);
        assert_eq!(samples.len(), 100);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.5));
    }

    #[test]
    fn test_square_halves() {
        let mut rng = create_rng(0);
        let samples = SquareSynth::new(200.0, 1.0).synthesize(10, 1000.0, &mut rng);
        assert_eq!(
            samples,
            vec![1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0, -1.0, -1.0]
        );
    }

    #[test]
    fn test_saw_ramp() {
        let mut rng = create_rng(0);
        let samples = SawSynth::new(250.0, 2.0).synthesize(8, 1000.0, &mut rng);
        assert_eq!(samples, vec![2.0, 1.0, 0.0, -1.0, 2.0, 1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_narrow_pulse_pattern() {
        let mut rng = create_rng(0);
        let samples = NarrowPulseSynth::new(250.0, 0.8).synthesize(8, 1000.0, &mut rng);
        assert_eq!(samples, vec![0.8, -0.8, 0.0, 0.0, 0.8, -0.8, 0.0, 0.0]);
    }

    #[test]
    fn test_narrow_pulse_two_sample_cycle() {
        let mut rng = create_rng(0);
        let samples = NarrowPulseSynth::new(500.0, 1.0).synthesize(4, 1000.0, &mut rng);
        assert_eq!(samples, vec![1.0, -1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_zero_samples() {
        let mut rng = create_rng(0);
        assert!(SquareSynth::new(440.0, 1.0)
            .synthesize(0, 44100.0, &mut rng)
            .is_empty());
    }
}
