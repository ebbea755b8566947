//! Oscillator primitives shared by the time-domain generators.
//!
//! Time-domain families work in sample indices rather than accumulated
//! phase: the position inside the current cycle is `i mod floor(cycle)`,
//! where `cycle = sample_rate / frequency`. Keeping the integer modulus makes
//! every sample a pure function of its index.

use std::f64::consts::PI;

/// 2 * PI.
pub const TWO_PI: f64 = 2.0 * PI;

/// Time in seconds of sample `index`.
#[inline]
pub fn time_at(index: usize, sample_rate: f64) -> f64 {
    index as f64 / sample_rate
}

/// Sine of a phase in radians.
#[inline]
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}

/// Linear interpolation from `from` to `to` by `t`.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Cycle arithmetic for one oscillator frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycle {
    length: f64,
    whole: usize,
}

impl Cycle {
    /// Creates the cycle for `frequency` at `sample_rate`.
    ///
    /// A cycle shorter than one sample has a whole length of 0; its phase
    /// index is pinned to 0 instead of dividing by zero.
    pub fn new(sample_rate: f64, frequency: f64) -> Self {
        let length = sample_rate / frequency;
        let whole = if length.is_finite() && length >= 1.0 {
            length.floor() as usize
        } else {
            0
        };
        Self { length, whole }
    }

    /// Samples per period (real-valued).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Samples per period, rounded down.
    pub fn whole(&self) -> usize {
        self.whole
    }

    /// Integer position of sample `index` within its cycle.
    #[inline]
    pub fn phase_index(&self, index: usize) -> usize {
        if self.whole == 0 {
            0
        } else {
            index % self.whole
        }
    }

    /// Position of sample `index` within its cycle as a fraction in [0, 1).
    #[inline]
    pub fn fractional_phase(&self, index: usize) -> f64 {
        self.phase_index(index) as f64 / self.length
    }

    /// True while sample `index` lies in the first half of its cycle.
    #[inline]
    pub fn in_first_half(&self, index: usize) -> bool {
        (self.phase_index(index) as f64) < self.length / 2.0
    }

    /// Unit falling sawtooth: 1 at the start of each cycle, approaching -1
    /// at its end.
    #[inline]
    pub fn sawtooth(&self, index: usize) -> f64 {
        2.0 * (1.0 - self.fractional_phase(index)) - 1.0
    }
}
