// ABOUTME: Pierre planner CLI - generate sessions, inspect recovery, and estimate durations
// ABOUTME: Reads JSON requests and plans from disk and writes JSON results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a session from a request file
//! pierre-planner generate --input request.json --pretty
//!
//! # Regenerate with a different seed and a 45 minute budget
//! pierre-planner generate --input request.json --seed 7 --budget 45
//!
//! # Recovery map, or warnings for specific muscles
//! pierre-planner recovery --input request.json --muscles chest,triceps
//!
//! # Estimated minutes for a saved plan
//! pierre-planner estimate --plan plan.json
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pierre_session_planner::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pierre-planner",
    about = "Pierre strength session planner",
    long_about = "Deterministic strength session generation: warmup, main lifts, and accessories with set/rep/RPE/rest prescriptions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a session from a JSON request
    Generate {
        /// Request file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Override the request seed
        #[arg(long)]
        seed: Option<u64>,

        /// Override the time budget in minutes
        #[arg(long)]
        budget: Option<u32>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Show per-muscle recovery for a request's history
    Recovery {
        /// Request file
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Comma-separated muscles to check; prints warnings instead of the full map
        #[arg(long, value_delimiter = ',')]
        muscles: Vec<String>,
    },
    /// Estimate the duration of a saved plan
    Estimate {
        /// Plan file (a plan or a full generation outcome)
        #[arg(long, short = 'p')]
        plan: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;
    debug!("pierre-planner starting");

    match cli.command {
        Command::Generate {
            input,
            seed,
            budget,
            pretty,
        } => commands::generate::run(&input, seed, budget, pretty),
        Command::Recovery { input, muscles } => commands::recovery::run(&input, &muscles),
        Command::Estimate { plan } => commands::estimate::run(&plan),
    }
}
