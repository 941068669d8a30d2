// ABOUTME: CLI for parsing a Strong export from a file or stdin and printing metrics
// ABOUTME: Human summary by default, manual-activity JSON with --json
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//!
//! Usage:
//! ```bash
//! # Human-readable summary from a file
//! strong-metrics export.txt
//!
//! # Manual-activity payload as JSON, export piped on stdin
//! cat export.txt | strong-metrics --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use strong_metrics::{ManualActivity, SessionMetrics, WorkoutParser};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "strong-metrics",
    about = "Parse a Strong app workout export and estimate training metrics"
)]
struct Cli {
    /// Path to the export text; reads stdin when omitted
    input: Option<PathBuf>,

    /// Print the manual-activity payload as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let parser = WorkoutParser::new();
    if !parser.is_workout_export(&text) {
        warn!("input does not look like a workout export; attempting to parse anyway");
    }

    let parsed = parser.parse(&text)?;
    for warning in &parsed.warnings {
        warn!("{warning}");
    }

    if cli.json {
        let activity = ManualActivity::from_workout(&parsed.workout);
        println!("{}", serde_json::to_string_pretty(&activity)?);
        return Ok(());
    }

    let workout = &parsed.workout;
    let metrics = SessionMetrics::for_workout(workout);
    println!("{} ({})", workout.title, workout.performed_at.format("%Y-%m-%d %H:%M"));
    for exercise in &workout.exercises {
        println!("  {} ({} sets)", exercise.name, exercise.sets.len());
    }
    println!("total volume: {:.0} kg·reps", metrics.total_volume_kg);
    println!("training load: {}", metrics.training_load);
    println!("estimated duration: {} min", metrics.duration_minutes);
    Ok(())
}
