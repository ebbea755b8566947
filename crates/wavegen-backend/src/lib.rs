//! wavegen Synthesis Backend
//!
//! Turns a validated [`wavegen_spec::Request`] into a buffer of samples.
//!
//! # Families
//!
//! - **Time domain** - sine, square, sawtooth, repeating narrow pulse
//! - **Additive** - square, sawtooth and triangle series, plus a custom
//!   10-harmonic series
//! - **Noise** - quantized white noise
//! - **Karplus-Strong** - plucked string recurrence
//! - **FM** - two-operator FM with an optional ADSR on the modulation depth
//!
//! # Determinism
//!
//! Every generator is a pure function of the request and its random source.
//! [`generate()`] seeds PCG32 from `request.seed`, so identical requests
//! produce identical samples and an identical [`SampleBuffer::pcm_hash`].
//! [`generate_with_rng()`] accepts any `rand::RngCore` instead.
//!
//! # Example
//!
//! ```
//! use wavegen_backend::generate;
//! use wavegen_spec::{Family, Request};
//!
//! let request = Request::builder(Family::SquareAdditive, 22050)
//!     .frequency(220.0)
//!     .amplitude(0.5)
//!     .duration(0.25)
//!     .build();
//!
//! let buffer = generate(&request).unwrap();
//! assert_eq!(buffer.len(), 5512);
//! assert!(buffer.peak() <= 0.5 * 1.2);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Validation and family dispatch
//! - [`buffer`] - Owned output buffer with summary statistics
//! - [`envelope`] - ADSR envelope
//! - [`oscillator`] - Cycle arithmetic shared by time-domain generators
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`synthesis`] - Per-family generators

pub mod buffer;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod oscillator;
pub mod rng;
pub mod synthesis;

pub use buffer::SampleBuffer;
pub use error::{SynthError, SynthResult};
pub use generate::{generate, generate_with_rng, synthesizer_for};
pub use synthesis::Synthesizer;
