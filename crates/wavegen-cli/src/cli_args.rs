//! CLI argument definitions for the wavegen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// wavegen - Deterministic Waveform Generation
#[derive(Parser)]
#[command(name = "wavegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate a request file without generating samples
    Validate {
        /// Path to the request file (JSON)
        #[arg(short, long)]
        request: String,

        /// Override the request's sample rate (Hz)
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate samples from a request file
    Generate {
        /// Path to the request file (JSON)
        #[arg(short, long)]
        request: String,

        /// Override the request's sample rate (Hz)
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Override the request's seed
        #[arg(long)]
        seed: Option<u32>,

        /// Write the samples to this file as a JSON array
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print a starter request for a family
    Template {
        /// Family tag (e.g. sine-time, karplus-strong, fm)
        #[arg(short, long)]
        family: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
