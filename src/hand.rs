//! Hand landmark data model.
//!
//! Models the 21-point hand topology produced by the external hand tracker.
//! Coordinates are normalized to the image ([0, 1] on each axis) and image y
//! grows downward, so a smaller y is higher on screen.

use serde::Deserialize;
use thiserror::Error;

/// Landmarks per detected hand.
pub const LANDMARK_COUNT: usize = 21;

/// One tracked point on a hand, identified by its position in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Depth estimate from the tracker; carried on the wire but unused by
    /// classification.
    #[serde(default)]
    pub z: f32,
}

/// The five fingers, each with a fixed tip and mid-joint landmark index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers, thumb first.
    pub const ALL: [Finger; 5] = [
        Self::Thumb,
        Self::Index,
        Self::Middle,
        Self::Ring,
        Self::Pinky,
    ];

    /// Landmark index of the fingertip.
    pub fn tip(&self) -> usize {
        match self {
            Self::Thumb => 4,
            Self::Index => 8,
            Self::Middle => 12,
            Self::Ring => 16,
            Self::Pinky => 20,
        }
    }

    /// Landmark index of the mid joint below the tip.
    pub fn joint(&self) -> usize {
        match self {
            Self::Thumb => 3,
            Self::Index => 6,
            Self::Middle => 10,
            Self::Ring => 14,
            Self::Pinky => 18,
        }
    }
}

/// Errors produced while assembling a frame from tracker output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// The tracker delivered the wrong number of landmarks.
    #[error("malformed frame: expected 21 landmarks, got {0}")]
    MalformedFrame(usize),
}

/// The full 21-landmark snapshot for one hand in one camera tick.
///
/// Construction enforces the landmark count, so classification over a
/// `HandFrame` is total.
#[derive(Debug, Clone, PartialEq)]
pub struct HandFrame {
    landmarks: Vec<Landmark>,
}

impl HandFrame {
    /// Build a frame from tracker output, enforcing the landmark count.
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self, FrameError> {
        if landmarks.len() != LANDMARK_COUNT {
            return Err(FrameError::MalformedFrame(landmarks.len()));
        }
        Ok(Self { landmarks })
    }

    /// Fingertip landmark.
    pub fn tip(&self, finger: Finger) -> Landmark {
        self.landmarks[finger.tip()]
    }

    /// Mid-joint landmark.
    pub fn joint(&self, finger: Finger) -> Landmark {
        self.landmarks[finger.joint()]
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_requires_21_landmarks() {
        let frame = HandFrame::new(vec![Landmark::default(); LANDMARK_COUNT]);
        assert!(frame.is_ok());
    }

    #[test]
    fn test_short_frame_is_malformed() {
        let err = HandFrame::new(vec![Landmark::default(); 18]).unwrap_err();
        assert_eq!(err, FrameError::MalformedFrame(18));
        assert_eq!(
            err.to_string(),
            "malformed frame: expected 21 landmarks, got 18"
        );
    }

    #[test]
    fn test_long_frame_is_malformed() {
        let err = HandFrame::new(vec![Landmark::default(); 22]).unwrap_err();
        assert_eq!(err, FrameError::MalformedFrame(22));
    }

    #[test]
    fn test_finger_indices() {
        assert_eq!(Finger::Thumb.tip(), 4);
        assert_eq!(Finger::Thumb.joint(), 3);
        assert_eq!(Finger::Index.tip(), 8);
        assert_eq!(Finger::Index.joint(), 6);
        assert_eq!(Finger::Pinky.tip(), 20);
        assert_eq!(Finger::Pinky.joint(), 18);
    }

    #[test]
    fn test_tip_and_joint_lookup() {
        let mut landmarks = vec![Landmark::default(); LANDMARK_COUNT];
        landmarks[8] = Landmark { x: 0.3, y: 0.2, z: 0.0 };
        landmarks[6] = Landmark { x: 0.3, y: 0.4, z: 0.0 };
        let frame = HandFrame::new(landmarks).unwrap();

        assert_eq!(frame.tip(Finger::Index).y, 0.2);
        assert_eq!(frame.joint(Finger::Index).y, 0.4);
    }
}
