//! Repcount CLI - replay landmark streams through the push-up counter
//!
//! Usage:
//!   pushup-counter --input frames.jsonl            # Replay a recorded stream
//!   cat frames.jsonl | pushup-counter              # Read frames from stdin
//!   pushup-counter --input f.jsonl --json          # JSON output per frame
//!   pushup-counter --input f.jsonl --record t.json # Save the angle trace

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use repcount::core::{read_frames, RepSession};
use repcount::types::{CounterConfig, FrameOutput};
use repcount::{RepError, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "pushup-counter",
    version = VERSION,
    about = "Count push-ups from a stream of pose landmarks",
    long_about = "Replays per-frame pose landmarks (JSON Lines) through the rep counter.\n\n\
                  Each line: {\"t_ms\": <ms>, \"landmarks\": [{\"x\", \"y\", \"z\", \"visibility\"}, ...]}\n\
                  using the 33-point MediaPipe Pose index layout.\n\n\
                  Phases:\n  \
                  UP    - Arms extended\n  \
                  DOWN  - Arms bent past the down threshold\n\n\
                  A rep is counted on every confirmed DOWN → UP."
)]
struct Args {
    /// JSON Lines file of frames (default: stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// TOML file overriding counter thresholds
    #[arg(short, long)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Only print frames that changed phase or count
    #[arg(long)]
    events_only: bool,

    /// Debug logging and transition details
    #[arg(short, long)]
    verbose: bool,

    /// Write the recorded angle trace to this JSON file
    #[arg(long)]
    record: Option<String>,

    /// Print the session summary at the end
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = match &args.config {
        Some(path) => CounterConfig::load(path)
            .with_context(|| format!("loading config from {}", path))?,
        None => CounterConfig::default(),
    };

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    run_replay(reader, config, &args)
}

/// Logs go to stderr so stdout stays parseable
fn init_logging(verbose: bool) {
    let default = if verbose { "repcount=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_replay(reader: Box<dyn BufRead>, config: CounterConfig, args: &Args) -> Result<()> {
    let mut session: Option<RepSession> = None;
    let mut last_t = 0.0;
    let mut bad_lines = 0usize;

    if !args.json {
        print_header();
    }

    for (line_no, frame) in read_frames(reader) {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                bad_lines += 1;
                tracing::warn!(line = line_no, error = %e, "skipping malformed frame");
                continue;
            }
        };

        // Session clock starts at the first frame
        if session.is_none() {
            let mut s = RepSession::with_config(config.clone(), frame.t_ms)?;
            if args.record.is_some() {
                s.start_recording(frame.t_ms);
            }
            session = Some(s);
        }
        let Some(active) = session.as_mut() else {
            continue;
        };
        last_t = frame.t_ms;

        let output = match active.try_process(&frame.landmarks, frame.t_ms) {
            Ok(output) => output,
            Err(e @ RepError::InvalidInput { .. }) => {
                bad_lines += 1;
                tracing::warn!(line = line_no, error = %e, "rejecting frame");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if args.events_only && !output.counted && !output.phase_changed {
            continue;
        }
        print_output(&output, args);
    }

    let Some(mut session) = session else {
        println!("No frames read.");
        return Ok(());
    };

    if let Some(path) = &args.record {
        let frames = session.stop_recording();
        let json = serde_json::to_string_pretty(&frames)?;
        std::fs::write(path, json).with_context(|| format!("writing recording to {}", path))?;
        if !args.json {
            println!("{}", format!("Recorded {} frames → {}", frames.len(), path).cyan());
        }
    }

    if args.summary {
        let summary = session.summary(last_t);
        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!();
            println!("{}", format!("Push-ups: {}", summary.count).bold());
            println!("Duration: {:.1}s", summary.duration_ms as f64 / 1000.0);
            println!(
                "Frames:   {} ({} skipped, {} rejected)",
                session.frames_processed(),
                session.frames_skipped(),
                bad_lines
            );
        }
    }

    Ok(())
}

fn print_header() {
    println!("{}", "========================================".bold());
    println!("{}", format!("  Repcount v{} - Push-up counter", VERSION).bold());
    println!("{}", "========================================".bold());
    println!();
}

fn print_output(output: &FrameOutput, args: &Args) {
    if args.json {
        match serde_json::to_string(output) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(error = %e, "failed to encode frame output"),
        }
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
        if args.verbose && output.reason.is_transition() {
            print_transition(output);
        }
    }
}

fn print_transition(output: &FrameOutput) {
    let detail = format!(
        "  └─ {} at t={:.0}ms (raw {:.1}°, smoothed {:.1}°)",
        output.reason.description(),
        output.t_ms,
        output.raw_angle,
        output.smoothed_angle
    );
    println!("{}", detail.color(output.phase.color()));
}
