//! Determinism checks.
//!
//! Runs a generation closure several times and compares the BLAKE3 hash of
//! each run's output bytes against the first run.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the first run's output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First run (0-indexed) whose hash differed, if any.
    pub first_mismatch: Option<usize>,
}

impl DeterminismResult {
    /// Panics with a descriptive message if the runs differed.
    pub fn assert_deterministic(&self) {
        assert!(self.is_deterministic, "{}", self);
    }
}

impl fmt::Display for DeterminismResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first_mismatch {
            None => write!(
                f,
                "deterministic over {} runs ({} bytes, {})",
                self.runs, self.output_size, self.hash
            ),
            Some(run) => write!(
                f,
                "run {} differs from run 0 ({} bytes, {})",
                run, self.output_size, self.hash
            ),
        }
    }
}

/// BLAKE3 hash of a byte slice as hex.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Calls `generate` `runs` times and compares the outputs.
pub fn verify_determinism<F>(mut generate: F, runs: usize) -> DeterminismResult
where
    F: FnMut() -> Vec<u8>,
{
    assert!(runs >= 2, "need at least 2 runs, got {}", runs);

    let first = generate();
    let hash = compute_hash(&first);
    let first_mismatch = (1..runs).find(|_| compute_hash(&generate()) != hash);

    DeterminismResult {
        is_deterministic: first_mismatch.is_none(),
        runs,
        output_size: first.len(),
        hash,
        first_mismatch,
    }
}

/// Little-endian bytes of a sample slice.
pub fn sample_bytes(samples: &[f64]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_output_is_deterministic() {
        let result = verify_determinism(|| vec![1, 2, 3], 4);
        result.assert_deterministic();
        assert_eq!(result.output_size, 3);
    }

    #[test]
    fn test_changing_output_is_detected() {
        let mut counter = 0u8;
        let result = verify_determinism(
            || {
                counter += 1;
                vec![counter]
            },
            3,
        );
        assert!(!result.is_deterministic);
        assert_eq!(result.first_mismatch, Some(1));
    }

    #[test]
    fn test_sample_bytes() {
        assert_eq!(sample_bytes(&[1.0]), 1.0_f64.to_le_bytes().to_vec());
    }
}
