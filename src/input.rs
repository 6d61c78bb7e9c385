//! Frame ingestion from the external hand tracker.
//!
//! The tracker process writes one JSON object per line (NDJSON).  A detected
//! hand carries its landmarks; an empty object (or an empty/null landmark
//! list) means no hand this tick:
//!
//! ```text
//! {"landmarks":[{"x":0.41,"y":0.62,"z":0.0}, ...]}
//! {}
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::hand::{FrameError, HandFrame, Landmark};

/// One tracker tick on the wire.
#[derive(Debug, Default, Deserialize)]
struct FrameRecord {
    #[serde(default)]
    landmarks: Option<Vec<Landmark>>,
}

/// Outcome of parsing one tracker line.
#[derive(Debug)]
pub enum FrameInput {
    /// A well-formed 21-landmark hand.
    Hand(HandFrame),
    /// No hand detected this tick.
    NoHand,
    /// A hand with the wrong landmark count; the engine treats it as no
    /// match for every gesture.
    Malformed(FrameError),
}

/// Parse one NDJSON line from the tracker.
pub fn parse_line(line: &str) -> Result<FrameInput> {
    let record: FrameRecord =
        serde_json::from_str(line).context("malformed tracker line")?;
    Ok(match record.landmarks {
        None => FrameInput::NoHand,
        Some(landmarks) if landmarks.is_empty() => FrameInput::NoHand,
        Some(landmarks) => match HandFrame::new(landmarks) {
            Ok(frame) => FrameInput::Hand(frame),
            Err(err) => FrameInput::Malformed(err),
        },
    })
}

// ── Tests ──────────────────────────────────────────────────
