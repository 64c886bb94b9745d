//! Swipecode CLI
//!
//! Replays recorded flings against a swipe code, or classifies a single swipe.
//!
//! # Usage
//! ```bash
//! swipecode replay --config lock.toml flings.csv [--json] [--expect 1]
//! swipecode replay --code "up|up|down" flings.csv
//! swipecode classify 0 100 0 0 [--intercardinal]
//! ```

mod trace;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use swipecode_core::{
    angle, classify, Alphabet, Direction, FeedOutcome, SwipeCodeConfig, SwipeCodeRecognizer,
};

#[derive(Parser)]
#[command(name = "swipecode", author, version, about = "Directional swipe-code recognizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a fling trace against a swipe code
    Replay {
        /// Trace file, one `x1,y1,x2,y2[,vx,vy]` fling per line
        trace: PathBuf,

        /// TOML configuration with `directions` and `code`
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Code text, overrides the configuration file
        #[arg(long)]
        code: Option<String>,

        /// Use the 8-way alphabet, overrides the configuration file
        #[arg(long)]
        intercardinal: bool,

        /// Print one JSON object per fling
        #[arg(long)]
        json: bool,

        /// Fail unless exactly this many completions occur
        #[arg(long)]
        expect: Option<usize>,
    },

    /// Classify a single swipe
    Classify {
        #[arg(allow_negative_numbers = true)]
        x1: f32,
        #[arg(allow_negative_numbers = true)]
        y1: f32,
        #[arg(allow_negative_numbers = true)]
        x2: f32,
        #[arg(allow_negative_numbers = true)]
        y2: f32,

        /// Use the 8-way alphabet
        #[arg(long)]
        intercardinal: bool,
    },
}

#[derive(Serialize)]
struct ReplayRecord {
    fling: usize,
    direction: Direction,
    state: usize,
    #[serde(flatten)]
    outcome: FeedOutcome,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Replay {
            trace,
            config,
            code,
            intercardinal,
            json,
            expect,
        } => {
            let config = resolve_config(config, code, intercardinal)?;
            let completions = replay(&config, &trace, json)?;
            if let Some(expected) = expect {
                if completions != expected {
                    bail!("expected {expected} completion(s), got {completions}");
                }
            }
            Ok(())
        }
        Commands::Classify {
            x1,
            y1,
            x2,
            y2,
            intercardinal,
        } => {
            let alphabet = alphabet_for(intercardinal);
            println!(
                "{:.3}° {}",
                angle(x1, y1, x2, y2),
                classify(x1, y1, x2, y2, alphabet)
            );
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

fn alphabet_for(intercardinal: bool) -> Alphabet {
    if intercardinal {
        Alphabet::Intercardinal
    } else {
        Alphabet::Cardinal
    }
}

fn resolve_config(
    path: Option<PathBuf>,
    code: Option<String>,
    intercardinal: bool,
) -> Result<SwipeCodeConfig> {
    let mut config = match &path {
        Some(path) => SwipeCodeConfig::from_file(path)?,
        None if code.is_some() => SwipeCodeConfig::new(),
        None => bail!("either --config or --code is required"),
    };
    if let Some(code) = code {
        config = config.with_code(code);
    }
    if intercardinal {
        config = config.with_directions(Alphabet::Intercardinal);
    }
    Ok(config)
}

fn replay(config: &SwipeCodeConfig, trace_path: &std::path::Path, json: bool) -> Result<usize> {
    let mut recognizer =
        SwipeCodeRecognizer::from_config(config).context("Invalid swipe code configuration")?;
    let flings = trace::read_trace(trace_path)?;
    tracing::info!(
        "Replaying {} fling(s) against '{}' ({})",
        flings.len(),
        recognizer.code(),
        recognizer.alphabet()
    );

    let completions = Arc::new(AtomicUsize::new(0));
    let counter = completions.clone();
    recognizer.add_listener_fn(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    for (index, fling) in flings.iter().enumerate() {
        let direction = fling.direction(recognizer.alphabet());
        let outcome = recognizer.feed_direction(direction);
        let record = ReplayRecord {
            fling: index + 1,
            direction,
            state: recognizer.state(),
            outcome,
        };

        if json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!(
                "{:>4}  {:<9}  {}",
                record.fling,
                record.direction,
                describe(&record.outcome)
            );
        }
    }

    let completions = completions.load(Ordering::SeqCst);
    tracing::info!("Replay finished: {} completion(s)", completions);
    Ok(completions)
}

fn describe(outcome: &FeedOutcome) -> String {
    match outcome {
        FeedOutcome::Ignored => "ignored (empty code)".to_string(),
        FeedOutcome::Advanced { state } => format!("advanced to {state}"),
        FeedOutcome::Completed { notified, failed } => {
            format!("completed ({notified} listener(s), {failed} failed)")
        }
        FeedOutcome::Reset { from } => format!("reset from {from}"),
    }
}
