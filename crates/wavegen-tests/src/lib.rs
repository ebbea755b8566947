//! wavegen End-to-End Test Infrastructure
//!
//! Shared helpers for the integration tests in `tests/`:
//!
//! - [`fixtures`]: one representative request per family, and a temporary
//!   directory for request files
//! - [`determinism`]: run a generation closure several times and compare
//!   BLAKE3 hashes of its output
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavegen-tests
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{compute_hash, verify_determinism, DeterminismResult};
pub use fixtures::{all_family_requests, RequestFixture};
