//! wavegen CLI library.
//!
//! Request loading and the `validate`, `generate` and `template` commands.
//! The binary in `main.rs` only parses arguments and dispatches here.

pub mod commands;
pub mod input;
