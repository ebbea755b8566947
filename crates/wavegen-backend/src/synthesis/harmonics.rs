//! Additive synthesis from bounded harmonic series.
//!
//! Every series is expanded into a finite list of [`Partial`]s before any
//! sample is computed. Expansion is a single loop with two exits: the next
//! harmonic would reach Nyquist, or the series has produced its limit of
//! partials ([`MAX_HARMONICS`], or the coefficient count for custom series).

use std::f64::consts::PI;

use rand::RngCore;

use super::Synthesizer;
use crate::oscillator::{time_at, TWO_PI};

/// Hard cap on partials for the closed-form series.
pub const MAX_HARMONICS: usize = 1000;

/// Basis function used for every partial of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// `sin(2 pi k f t)`.
    Sine,
    /// `cos(2 pi k f t)`.
    Cosine,
}

impl Basis {
    #[inline]
    fn eval(self, phase: f64) -> f64 {
        match self {
            Basis::Sine => phase.sin(),
            Basis::Cosine => phase.cos(),
        }
    }
}

/// One harmonic of an expanded series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Harmonic number (1 = fundamental).
    pub harmonic: usize,
    /// Weight of this harmonic.
    pub coefficient: f64,
}

/// Harmonic recipe for an additive family.
#[derive(Debug, Clone, PartialEq)]
pub enum HarmonicSeries {
    /// Odd harmonics, `(4/pi)/k`, sine basis.
    Square,
    /// All harmonics, `(2/pi)/k`, sine basis.
    Sawtooth,
    /// Odd harmonics, `(8/pi^2)/k^2`, cosine basis.
    Triangle,
    /// Caller coefficients for harmonics `1..=len`, sine basis.
    Custom(Vec<f64>),
}

impl HarmonicSeries {
    /// Basis shared by all partials of this series.
    pub fn basis(&self) -> Basis {
        match self {
            HarmonicSeries::Triangle => Basis::Cosine,
            _ => Basis::Sine,
        }
    }

    /// Weight of harmonic `k` (1-based).
    pub fn coefficient(&self, k: usize) -> f64 {
        let k_f = k as f64;
        match self {
            HarmonicSeries::Square => (4.0 / PI) / k_f,
            HarmonicSeries::Sawtooth => (2.0 / PI) / k_f,
            HarmonicSeries::Triangle => (8.0 / (PI * PI)) / (k_f * k_f),
            HarmonicSeries::Custom(coefficients) => {
                coefficients.get(k.wrapping_sub(1)).copied().unwrap_or(0.0)
            }
        }
    }

    fn step(&self) -> usize {
        match self {
            HarmonicSeries::Square | HarmonicSeries::Triangle => 2,
            HarmonicSeries::Sawtooth | HarmonicSeries::Custom(_) => 1,
        }
    }

    fn limit(&self) -> usize {
        match self {
            HarmonicSeries::Custom(coefficients) => coefficients.len().min(MAX_HARMONICS),
            _ => MAX_HARMONICS,
        }
    }

    /// Expands the series for a fundamental of `frequency` Hz.
    ///
    /// Returns no partials when the fundamental itself is at or above
    /// Nyquist, or is not a positive finite number.
    pub fn partials(&self, frequency: f64, sample_rate: f64) -> Vec<Partial> {
        let mut partials = Vec::new();
        if !(frequency.is_finite() && frequency > 0.0) {
            return partials;
        }

        let nyquist = sample_rate / 2.0;
        let limit = self.limit();
        let step = self.step();
        let mut k = 1;
        while partials.len() < limit {
            if k as f64 * frequency >= nyquist {
                break;
            }
            partials.push(Partial {
                harmonic: k,
                coefficient: self.coefficient(k),
            });
            k += step;
        }
        partials
    }
}

/// Additive synthesizer over a [`HarmonicSeries`].
#[derive(Debug, Clone)]
pub struct AdditiveSynth {
    /// Fundamental frequency in Hz.
    pub frequency: f64,
    /// Output scale.
    pub amplitude: f64,
    /// Harmonic recipe.
    pub series: HarmonicSeries,
}

impl AdditiveSynth {
    /// Creates an additive synthesizer.
    pub fn new(frequency: f64, amplitude: f64, series: HarmonicSeries) -> Self {
        Self {
            frequency,
            amplitude,
            series,
        }
    }
}

impl Synthesizer for AdditiveSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        let basis = self.series.basis();
        // (angular frequency, coefficient)
        let terms: Vec<(f64, f64)> = self
            .series
            .partials(self.frequency, sample_rate)
            .into_iter()
            .map(|p| (TWO_PI * p.harmonic as f64 * self.frequency, p.coefficient))
            .collect();

        (0..num_samples)
            .map(|i| {
                let t = time_at(i, sample_rate);
                let sum: f64 = terms
                    .iter()
                    .map(|&(omega, coefficient)| coefficient * basis.eval(omega * t))
                    .sum();
                self.amplitude * sum
            })
            .collect()
    }
}
