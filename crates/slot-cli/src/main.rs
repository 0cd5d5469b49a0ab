//! `slots` CLI — run the availability matcher from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Match a request document (stdin → stdout)
//! cat request.json | slots match
//!
//! # Match from file to file, pretty-printed
//! slots match -i request.json -o ranked.json --pretty
//!
//! # Score pre-generated slots without matching
//! echo '{"slots":[{"start":"2026-03-03T10:00:00Z","end":"2026-03-03T11:00:00Z"}]}' | slots score
//! ```
//!
//! A match request document carries both users' availability, their existing
//! bookings, and optional matching options:
//!
//! ```json
//! {
//!   "candidate_availability": [{"user_id": "cand-1", "slots": [...]}],
//!   "interviewer_availability": [{"user_id": "ivr-1", "slots": [...]}],
//!   "bookings": [],
//!   "options": {"duration_minutes": 60, "max_slots": 3}
//! }
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use slot_engine::{
    find_optimal_slots, AvailabilityRecord, BookedInterview, MatchOptions, PreferredHours,
    ScoringPolicy, TimeInterval,
};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Availability matching and interview slot scoring"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find and rank mutually available interview slots
    Match {
        /// Input request file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Score already-generated slots without matching
    Score {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// A full matching request: both users' snapshots plus options.
#[derive(Deserialize)]
struct MatchRequest {
    candidate_availability: Vec<AvailabilityRecord>,
    interviewer_availability: Vec<AvailabilityRecord>,
    #[serde(default)]
    bookings: Vec<BookedInterview>,
    #[serde(default)]
    options: RequestOptions,
}

/// Options as they appear on the wire. Everything is optional; missing fields
/// fall back to the engine defaults (60 minutes, top 3, two-week window).
#[derive(Deserialize, Default)]
#[serde(default)]
struct RequestOptions {
    duration_minutes: Option<u32>,
    max_slots: Option<usize>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    preferred_hours: Option<PreferredHours>,
    step_minutes: Option<u32>,
    /// Pinned clock for recency scoring; defaults to the wall clock.
    now: Option<DateTime<Utc>>,
    timezone: Option<String>,
}

impl RequestOptions {
    fn into_match_options(self) -> MatchOptions {
        let now = self.now.unwrap_or_else(Utc::now);
        let mut options = MatchOptions::new(now);

        if let Some(duration) = self.duration_minutes {
            options.duration_minutes = duration;
        }
        if let Some(max_slots) = self.max_slots {
            options.max_slots = max_slots;
        }
        if let Some(start) = self.start_date {
            options.window.start = start;
        }
        if let Some(end) = self.end_date {
            options.window.end = end;
        }
        if let Some(step) = self.step_minutes {
            options.step_minutes = step;
        }
        if let Some(timezone) = self.timezone {
            options.timezone = timezone;
        }
        options.preferred_hours = self.preferred_hours;
        options
    }
}

/// A scoring-only request: slots to annotate, no generation.
#[derive(Deserialize)]
struct ScoreRequest {
    slots: Vec<TimeInterval>,
    #[serde(default)]
    preferred_hours: Option<PreferredHours>,
    #[serde(default)]
    now: Option<DateTime<Utc>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Match {
            input,
            output,
            pretty,
        } => {
            let raw = read_input(input.as_deref())?;
            let request: MatchRequest =
                serde_json::from_str(&raw).context("Failed to parse match request JSON")?;

            let options = request.options.into_match_options();
            let ranked = find_optimal_slots(
                &request.candidate_availability,
                &request.interviewer_availability,
                &request.bookings,
                &options,
            )
            .context("Matching failed")?;

            write_output(output.as_deref(), &serialize(&ranked, pretty)?)?;
        }
        Commands::Score {
            input,
            output,
            pretty,
        } => {
            let raw = read_input(input.as_deref())?;
            let request: ScoreRequest =
                serde_json::from_str(&raw).context("Failed to parse score request JSON")?;

            for slot in &request.slots {
                TimeInterval::new(slot.start, slot.end)
                    .context("Invalid slot in score request")?;
            }

            let now = request.now.unwrap_or_else(Utc::now);
            let count = request.slots.len();
            let ranked = slot_engine::scoring::rank_slots(
                request.slots,
                &ScoringPolicy::default(),
                request.preferred_hours.as_ref(),
                now,
                count,
            );

            write_output(output.as_deref(), &serialize(&ranked, pretty)?)?;
        }
    }

    Ok(())
}

fn serialize<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
