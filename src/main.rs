//! handwave — hand-gesture URL launcher.
//!
//! Consumes hand-landmark frames from an external tracker (one JSON object
//! per line on stdin or a file), classifies and debounces the fixed gesture
//! catalog, and opens the URL bound to each confirmed gesture.

mod dispatch;
mod gesture;
mod hand;
mod input;
mod mapping;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use dispatch::{Dispatcher, DryRunOpener, SystemOpener, UrlOpener};
use gesture::{EngineConfig, GestureEngine, GestureKind, DEFAULT_CONFIRM_FRAMES};
use input::FrameInput;
use mapping::ActionMap;

#[derive(Parser, Debug)]
#[command(name = "handwave", about = "Hand-gesture URL launcher")]
struct Cli {
    /// Gesture-to-URL mapping file
    #[arg(long, global = true, default_value = "gesture-urls.json")]
    mapping: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read tracker frames and launch bound URLs (the default)
    Run {
        /// Read frames from a file instead of stdin
        #[arg(long)]
        frames: Option<PathBuf>,

        /// Consecutive positive frames before a gesture confirms
        #[arg(long, default_value_t = DEFAULT_CONFIRM_FRAMES)]
        confirm_frames: u32,

        /// Log launches instead of opening URLs
        #[arg(long)]
        dry_run: bool,
    },
    /// Bind a gesture to a URL
    Bind { gesture: GestureKind, url: String },
    /// Remove a gesture binding
    Unbind { gesture: GestureKind },
    /// List current bindings
    Bindings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handwave=info".into()),
        )
        .init();

    let command = cli.command.unwrap_or(Command::Run {
        frames: None,
        confirm_frames: DEFAULT_CONFIRM_FRAMES,
        dry_run: false,
    });

    match command {
        Command::Run {
            frames,
            confirm_frames,
            dry_run,
        } => run(&cli.mapping, frames, confirm_frames, dry_run),
        Command::Bind { gesture, url } => bind(&cli.mapping, gesture, url),
        Command::Unbind { gesture } => unbind(&cli.mapping, gesture),
        Command::Bindings => bindings(&cli.mapping),
    }
}

/// Main loop: one tracker line per camera tick, processed to completion
/// before the next is read.
fn run(
    mapping_path: &Path,
    frames: Option<PathBuf>,
    confirm_frames: u32,
    dry_run: bool,
) -> Result<()> {
    let map = ActionMap::load(mapping_path)?;
    if map.is_empty() {
        warn!(
            mapping = %mapping_path.display(),
            "mapping table is empty; confirmed gestures will be dropped"
        );
    }

    let opener: Box<dyn UrlOpener> = if dry_run {
        Box::new(DryRunOpener)
    } else {
        Box::new(SystemOpener)
    };
    let mut dispatcher = Dispatcher::new(map, opener);
    let mut engine = GestureEngine::new(EngineConfig { confirm_frames });

    let reader: Box<dyn BufRead> = match frames {
        Some(path) => Box::new(BufReader::new(File::open(&path).with_context(|| {
            format!("opening frame input {}", path.display())
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    info!(confirm_frames, "reading tracker frames");
    for line in reader.lines() {
        let line = line.context("reading tracker stream")?;
        if line.trim().is_empty() {
            continue;
        }

        let events = match input::parse_line(&line) {
            Ok(FrameInput::Hand(frame)) => engine.process(Some(&frame)),
            Ok(FrameInput::NoHand) => engine.process(None),
            Ok(FrameInput::Malformed(err)) => {
                warn!(frame = engine.frames_processed(), "{err}; resetting gesture state");
                engine.process(None)
            }
            Err(err) => {
                warn!("{err:#}; treating tick as no hand");
                engine.process(None)
            }
        };

        for event in &events {
            if let Err(err) = dispatcher.dispatch(event) {
                warn!(gesture = event.kind.as_str(), "dispatch failed: {err:#}");
            }
        }
    }

    info!(frames = engine.frames_processed(), "tracker stream ended");
    Ok(())
}

fn bind(mapping_path: &Path, gesture: GestureKind, url: String) -> Result<()> {
    let mut map = ActionMap::load(mapping_path)?;
    let replaced = map.bind(gesture, url.clone());
    map.save(mapping_path)?;
    match replaced {
        Some(old) => println!("{gesture}: {old} -> {url}"),
        None => println!("{gesture}: {url}"),
    }
    Ok(())
}

fn unbind(mapping_path: &Path, gesture: GestureKind) -> Result<()> {
    let mut map = ActionMap::load(mapping_path)?;
    match map.unbind(gesture) {
        Some(url) => {
            map.save(mapping_path)?;
            println!("removed {gesture} ({url})");
        }
        None => println!("no binding for {gesture}"),
    }
    Ok(())
}

fn bindings(mapping_path: &Path) -> Result<()> {
    let map = ActionMap::load(mapping_path)?;
    if map.is_empty() {
        println!("no bindings");
        return Ok(());
    }
    for (gesture, url) in map.iter() {
        println!("{gesture}\t{url}");
    }
    Ok(())
}
