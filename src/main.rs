//! Stereolab CLI
//!
//! Command-line driver: decode a WAV file, transform it, encode the result.

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use stereolab::cli::commands;
use stereolab::cli::{Cli, Commands};
use stereolab::dsp::{delay_from_secs, Transform};
use stereolab::engine::ExportFormat;
use stereolab::Result;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    info!("Stereolab v{}", env!("CARGO_PKG_VERSION"));

    let format = ExportFormat::new(cli.quantization);
    match handle_command(cli.command, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("[{}] {}", err.error_code(), err);
            eprintln!("Error: {}", err);
            for suggestion in err.recovery_suggestions() {
                eprintln!("  - {}", suggestion);
            }
            ExitCode::FAILURE
        }
    }
}

fn handle_command(cmd: Commands, format: ExportFormat) -> Result<()> {
    match cmd {
        Commands::Reverse { input, output } => {
            commands::run_transform(&input, &output, Transform::Reverse, format)
        }
        Commands::Mix {
            first,
            second,
            output,
            p,
        } => commands::run_transform(&first, &output, Transform::Mix { with: second, p }, format),
        Commands::Echo {
            input,
            output,
            echoes,
            delay,
            scale,
        } => {
            // validate before touching the input file
            delay_from_secs(delay)?;
            let step = Transform::Echo {
                num_echos: echoes,
                delay_secs: delay,
                scale,
            };
            commands::run_transform(&input, &output, step, format)
        }
        Commands::Pan { input, output } => {
            commands::run_transform(&input, &output, Transform::Pan, format)
        }
        Commands::RemoveVocals { input, output } => {
            commands::run_transform(&input, &output, Transform::RemoveVocals, format)
        }
        Commands::Apply {
            input,
            output,
            recipe,
        } => commands::apply_recipe(&input, &output, &recipe, format),
        Commands::Info { input } => commands::show_info(&input),
    }
}
