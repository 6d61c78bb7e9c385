//! Per-frame gesture classification.
//!
//! Pure, stateless boolean predicates over one `HandFrame`, one per
//! `GestureKind`.  A finger counts as extended when its tip is above its
//! mid joint (tip.y < joint.y in image coordinates) and bent when below.
//! The thumb is tested on the x axis instead, which assumes a right hand
//! facing the camera naturally; the test is not rotation-invariant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::hand::{Finger, HandFrame};

/// Absolute tolerance, in normalized coordinates, for two fingertips to
/// count as touching.  Not scaled to hand size.
pub const TOUCH_TOLERANCE: f32 = 0.02;

/// The recognized static hand shapes, in classification/emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureKind {
    /// Index through pinky extended; thumb ignored.
    OpenHand,
    /// Thumb and index extended, remaining fingers bent.
    LShape,
    /// Thumb and index tips touching, remaining fingers bent.
    Pinch,
    /// Thumb and index tips touching, remaining fingers extended.
    Ok,
    /// Index and middle extended, ring and pinky bent.
    Victory,
    /// Thumb, index, and middle extended, ring and pinky bent.
    Three,
}

impl GestureKind {
    /// All kinds, in the order the engine classifies and emits them.
    pub const ALL: [GestureKind; 6] = [
        Self::OpenHand,
        Self::LShape,
        Self::Pinch,
        Self::Ok,
        Self::Victory,
        Self::Three,
    ];

    /// Stable name used in the mapping file and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenHand => "open-hand",
            Self::LShape => "l-shape",
            Self::Pinch => "pinch",
            Self::Ok => "ok",
            Self::Victory => "victory",
            Self::Three => "three",
        }
    }

    /// Whether this gesture is present in the given frame.
    pub fn matches(&self, frame: &HandFrame) -> bool {
        match self {
            Self::OpenHand => {
                extended(frame, Finger::Index)
                    && extended(frame, Finger::Middle)
                    && extended(frame, Finger::Ring)
                    && extended(frame, Finger::Pinky)
            }
            Self::LShape => {
                thumb_extended(frame)
                    && extended(frame, Finger::Index)
                    && bent(frame, Finger::Middle)
                    && bent(frame, Finger::Ring)
                    && bent(frame, Finger::Pinky)
            }
            Self::Pinch => {
                tips_touching(frame, Finger::Thumb, Finger::Index)
                    && bent(frame, Finger::Middle)
                    && bent(frame, Finger::Ring)
                    && bent(frame, Finger::Pinky)
            }
            Self::Ok => {
                tips_touching(frame, Finger::Thumb, Finger::Index)
                    && extended(frame, Finger::Middle)
                    && extended(frame, Finger::Ring)
                    && extended(frame, Finger::Pinky)
            }
            Self::Victory => {
                extended(frame, Finger::Index)
                    && extended(frame, Finger::Middle)
                    && bent(frame, Finger::Ring)
                    && bent(frame, Finger::Pinky)
            }
            Self::Three => {
                thumb_extended(frame)
                    && extended(frame, Finger::Index)
                    && extended(frame, Finger::Middle)
                    && bent(frame, Finger::Ring)
                    && bent(frame, Finger::Pinky)
            }
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GestureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GestureKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown gesture {s:?} (expected one of: open-hand, l-shape, pinch, ok, victory, three)"
                )
            })
    }
}

/// Tip above the mid joint on the image y axis.
fn extended(frame: &HandFrame, finger: Finger) -> bool {
    frame.tip(finger).y < frame.joint(finger).y
}

/// Tip below the mid joint on the image y axis.
fn bent(frame: &HandFrame, finger: Finger) -> bool {
    frame.tip(finger).y > frame.joint(finger).y
}

/// Thumb tip left of its joint on the image x axis.
fn thumb_extended(frame: &HandFrame) -> bool {
    frame.tip(Finger::Thumb).x < frame.joint(Finger::Thumb).x
}

/// Two fingertips within `TOUCH_TOLERANCE` on both axes.
fn tips_touching(frame: &HandFrame, a: Finger, b: Finger) -> bool {
    let (a, b) = (frame.tip(a), frame.tip(b));
    (a.x - b.x).abs() < TOUCH_TOLERANCE && (a.y - b.y).abs() < TOUCH_TOLERANCE
}

// ── Test helpers ───────────────────────────────────────────

#[cfg(test)]
use crate::hand::Landmark;

/// Landmarks posed with every finger bent, the thumb retracted, and the
/// fingertips spread apart so no two touch.  Tests pose gestures on top.
#[cfg(test)]
pub(crate) fn base_landmarks() -> Vec<Landmark> {
    use crate::hand::LANDMARK_COUNT;

    let mut landmarks = vec![Landmark::default(); LANDMARK_COUNT];
    for (i, finger) in Finger::ALL.iter().enumerate() {
        let x = 0.1 + i as f32 * 0.2;
        landmarks[finger.joint()] = Landmark { x, y: 0.5, z: 0.0 };
        landmarks[finger.tip()] = Landmark { x, y: 0.6, z: 0.0 };
    }
    // Thumb tip right of its joint: not extended under the x test.
    landmarks[Finger::Thumb.tip()].x = 0.15;
    landmarks
}

#[cfg(test)]
pub(crate) fn extend_finger(landmarks: &mut [Landmark], finger: Finger) {
    landmarks[finger.tip()].y = landmarks[finger.joint()].y - 0.1;
}

#[cfg(test)]
pub(crate) fn extend_thumb(landmarks: &mut [Landmark]) {
    landmarks[Finger::Thumb.tip()].x = landmarks[Finger::Thumb.joint()].x - 0.1;
}

#[cfg(test)]
pub(crate) fn touch_thumb_index(landmarks: &mut [Landmark]) {
    let index_tip = landmarks[Finger::Index.tip()];
    landmarks[Finger::Thumb.tip()] = Landmark {
        x: index_tip.x + 0.01,
        y: index_tip.y - 0.01,
        z: 0.0,
    };
}

// ── Tests ──────────────────────────────────────────────────
