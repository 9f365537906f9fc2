//! avsprep worker - AviSynth script generation tool
//!
//! This worker process receives a job configuration file via --config
//! argument, generates the AviSynth input script for the media, and
//! reports the artifact path via JSON messages on stdout.
//!
//! Dry-run mode: use --dry-run to print the rendered script lines to
//! stdout without writing an artifact.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod models;
mod directive_builder;
mod script_template;
mod script_assembler;
mod script_writer;
mod script_generator;
mod progress_reporter;
mod platform;

use models::ScriptJob;
use progress_reporter::ProgressReporter;
use script_generator::ScriptGenerator;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "avsprep-worker")]
#[command(about = "AviSynth input-script generation worker")]
#[command(version)]
struct Args {
    /// Path to the job configuration JSON file
    #[arg(long)]
    config: PathBuf,

    /// Print the rendered script to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Dry-run mode prints the bare script - no completion protocol
    if args.dry_run {
        return run_dry_run(&args);
    }

    let reporter = ProgressReporter::new();

    match run_worker(&args, &reporter) {
        Ok(script_path) => {
            reporter.send_complete(true, Some(&script_path));
            ExitCode::SUCCESS
        }
        Err(e) => {
            reporter.send_error(&format!("{:#}", e));
            reporter.send_complete(false, None);
            ExitCode::from(1)
        }
    }
}

/// Run in dry-run mode - print the rendered script lines to stdout
fn run_dry_run(args: &Args) -> ExitCode {
    // Load job configuration
    let config_content = match std::fs::read_to_string(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading config: {}", e);
            return ExitCode::from(1);
        }
    };

    let job: ScriptJob = match serde_json::from_str(&config_content) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error parsing config: {}", e);
            return ExitCode::from(1);
        }
    };

    let generator = ScriptGenerator::new(job.settings.clone(), ProgressReporter::new());
    for line in generator.render(&job) {
        println!("{}", line);
    }
    ExitCode::SUCCESS
}

fn run_worker(args: &Args, reporter: &ProgressReporter) -> Result<String> {
    // Load job configuration
    reporter.send_log(models::LogLevel::Info, "Loading job configuration...");
    let config_content = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config file: {:?}", args.config))?;
    let job: ScriptJob = serde_json::from_str(&config_content)
        .with_context(|| "Failed to parse job configuration")?;

    reporter.send_log(
        models::LogLevel::Info,
        &format!("Generating script for: {} (job {})", job.input_path, job.id),
    );
    reporter.send_log(
        models::LogLevel::Debug,
        &format!(
            "Toggles: multithreading={}, interframe={}, gpu={}, convertfps={}",
            job.settings.multithreading,
            job.settings.interframe,
            job.settings.interframe_gpu,
            job.settings.convert_fps
        ),
    );

    // Generate the AviSynth script
    let generator = ScriptGenerator::new(job.settings.clone(), reporter.clone());
    let artifact = generator
        .generate(&job)
        .with_context(|| "Failed to generate AviSynth script")?;

    // The consuming player outlives this process, so it owns cleanup
    let script_path = artifact.into_path();

    reporter.send_log(
        models::LogLevel::Debug,
        &format!("Script written to: {:?}", script_path),
    );

    Ok(script_path.to_string_lossy().into_owned())
}
