//! Resource budgets enforced at validation time.
//!
//! A request that would allocate more than the budget allows is rejected
//! before any samples are generated.

use serde::{Deserialize, Serialize};

/// Limits on the size of a generated buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleBudget {
    /// Maximum duration in seconds.
    pub max_duration_seconds: f64,
    /// Maximum number of samples in one buffer.
    pub max_samples: usize,
}

impl Default for SampleBudget {
    fn default() -> Self {
        Self {
            max_duration_seconds: Self::DEFAULT_MAX_DURATION_SECONDS,
            max_samples: Self::DEFAULT_MAX_SAMPLES,
        }
    }
}

impl SampleBudget {
    /// Default maximum duration: ten minutes.
    pub const DEFAULT_MAX_DURATION_SECONDS: f64 = 600.0;

    /// Default maximum sample count: ten minutes at 48 kHz.
    pub const DEFAULT_MAX_SAMPLES: usize = 600 * 48_000;

    /// Checks a duration and sample rate against the budget.
    ///
    /// The sample count is compared in `f64` so that huge durations cannot
    /// overflow the cast to `usize`.
    pub fn check(&self, duration_seconds: f64, sample_rate: u32) -> Result<(), BudgetError> {
        if duration_seconds > self.max_duration_seconds {
            return Err(BudgetError::DurationExceeded {
                limit: self.max_duration_seconds,
                actual: duration_seconds,
            });
        }
        let samples = (f64::from(sample_rate) * duration_seconds).floor();
        if samples > self.max_samples as f64 {
            return Err(BudgetError::SamplesExceeded {
                limit: self.max_samples,
                actual: samples,
            });
        }
        Ok(())
    }
}

/// A budget limit that a request exceeds.
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetError {
    /// Duration over the limit.
    DurationExceeded { limit: f64, actual: f64 },
    /// Sample count over the limit.
    SamplesExceeded { limit: usize, actual: f64 },
}

impl std::fmt::Display for BudgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetError::DurationExceeded { limit, actual } => write!(
                f,
                "duration_seconds {} exceeds the budget of {} seconds",
                actual, limit
            ),
            BudgetError::SamplesExceeded { limit, actual } => write!(
                f,
                "request needs {} samples, budget allows {}",
                actual, limit
            ),
        }
    }
}

impl std::error::Error for BudgetError {}
