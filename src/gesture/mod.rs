//! Gesture subsystem — per-frame classification and temporal debounce.
//!
//! Provides:
//! - `classifier`: pure boolean predicates, one per `GestureKind`
//! - `debounce`: the one-shot consecutive-frame latch
//! - `engine`: fan-out of each frame to every classifier and tracker

pub mod classifier;
pub mod debounce;
pub mod engine;

pub use classifier::GestureKind;
pub use debounce::DEFAULT_CONFIRM_FRAMES;
pub use engine::{EngineConfig, GestureEngine, GestureEvent};
