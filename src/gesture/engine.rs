//! Gesture engine — classification fan-out and per-kind debounce.
//!
//! Owns one `DebounceTracker` per `GestureKind` and processes one frame to
//! completion before the next (single-threaded, no shared state).  Each tick
//! yields zero or more confirmed-gesture events, always in `GestureKind::ALL`
//! order; overlapping predicates that confirm together are all emitted.

use tracing::debug;

use super::classifier::GestureKind;
use super::debounce::{DebounceTracker, DEFAULT_CONFIRM_FRAMES};
use crate::hand::HandFrame;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Consecutive positive frames before a gesture confirms.
    pub confirm_frames: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confirm_frames: DEFAULT_CONFIRM_FRAMES,
        }
    }
}

/// A confirmed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureEvent {
    pub kind: GestureKind,
    /// Zero-based index of the tick at which the gesture confirmed, counting
    /// every tick the engine has processed.
    pub frame: u64,
}

/// Central gesture recognition state.
pub struct GestureEngine {
    trackers: [DebounceTracker; GestureKind::ALL.len()],
    frames_processed: u64,
}

impl GestureEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            trackers: std::array::from_fn(|_| DebounceTracker::new(config.confirm_frames)),
            frames_processed: 0,
        }
    }

    /// Process one camera tick.  `None` means no hand was detected (or the
    /// frame was malformed); every tracker then sees a negative
    /// classification and resets.
    pub fn process(&mut self, hand: Option<&HandFrame>) -> Vec<GestureEvent> {
        let frame = self.frames_processed;
        self.frames_processed += 1;

        let mut events = Vec::new();
        for (tracker, kind) in self.trackers.iter_mut().zip(GestureKind::ALL) {
            let is_match = hand.map(|h| kind.matches(h)).unwrap_or(false);
            if tracker.update(is_match) {
                debug!(gesture = kind.as_str(), frame, "gesture confirmed");
                events.push(GestureEvent { kind, frame });
            }
        }
        events
    }

    /// Total ticks processed so far.
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }
}

// ── Tests ──────────────────────────────────────────────────
