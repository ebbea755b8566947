//! White noise.

use rand::{Rng, RngCore};

use super::Synthesizer;

/// Quantized white noise.
///
/// Each sample is `amplitude * ceil(u * (amplitude + 1)) * sign` with `u`
/// uniform in [0, 1) and `sign` a fair coin, drawn in that order. Samples are
/// independent; the output takes a small set of discrete levels rather than a
/// continuous range.
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    /// Output scale.
    pub amplitude: f64,
}

impl WhiteNoise {
    /// Creates a white noise generator.
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }

    /// Largest magnitude a sample can take.
    pub fn peak_bound(&self) -> f64 {
        self.amplitude.abs() * (self.amplitude + 1.0).ceil().abs()
    }

    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        let u: f64 = rng.gen();
        let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
        self.amplitude * (u * (self.amplitude + 1.0)).ceil() * sign
    }
}

impl Synthesizer for WhiteNoise {
    fn synthesize(&self, num_samples: usize, _sample_rate: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        (0..num_samples).map(|_| self.sample(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_noise_within_bound() {
        let noise = WhiteNoise::new(1.0);
        let mut rng = create_rng(42);
        let samples = noise.synthesize(10_000, 44100.0, &mut rng);
        assert_eq!(noise.peak_bound(), 2.0);
        assert!(samples.iter().all(|s| s.abs() <= 2.0));
    }

    #[test]
    fn test_noise_levels_are_discrete() {
        let noise = WhiteNoise::new(0.5);
        let mut rng = create_rng(7);
        for s in noise.synthesize(1000, 44100.0, &mut rng) {
            // ceil(u * 1.5) is 0, 1 or 2
            assert!([0.0, 0.5, 1.0].contains(&s.abs()), "unexpected level {}", s);
        }
    }

    #[test]
    fn test_noise_sign_is_unbiased() {
        let noise = WhiteNoise::new(1.0);
        let mut rng = create_rng(1234);
        let samples = noise.synthesize(20_000, 44100.0, &mut rng);
        let positive = samples.iter().filter(|&&s| s > 0.0).count() as f64;
        let negative = samples.iter().filter(|&&s| s < 0.0).count() as f64;
        let balance = (positive - negative) / (positive + negative);
        assert!(balance.abs() < 0.05, "sign balance {}", balance);
    }

    #[test]
    fn test_noise_same_seed_same_output() {
        let noise = WhiteNoise::new(0.3);
        let a = noise.synthesize(256, 44100.0, &mut create_rng(9));
        let b = noise.synthesize(256, 44100.0, &mut create_rng(9));
        assert_eq!(a, b);
    }
}
