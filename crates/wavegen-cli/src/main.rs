//! wavegen CLI - Command-line interface for deterministic waveform generation
//!
//! This binary validates requests, generates samples from them, and prints
//! starter requests for each family.

use clap::Parser;
use std::process::ExitCode;

use wavegen_cli::commands;
use wavegen_cli::commands::generate::GenerateOptions;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            request,
            sample_rate,
            json,
        } => commands::validate::run(&request, sample_rate, json),
        Commands::Generate {
            request,
            sample_rate,
            seed,
            output,
            json,
        } => {
            let options = GenerateOptions {
                sample_rate,
                seed,
                output: output.as_deref(),
            };
            commands::generate::run(&request, &options, json)
        }
        Commands::Template { family, json } => commands::template::run(&family, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
