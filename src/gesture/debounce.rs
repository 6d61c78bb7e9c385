//! Temporal debounce for per-frame classifications.
//!
//! A gesture must classify positive for a run of consecutive frames before
//! it confirms, and each run confirms at most once: the latch re-arms only
//! after at least one negative frame.  There is no wall-clock cooldown, so
//! the threshold is frame-rate-dependent.

/// Consecutive positive frames required before a gesture confirms
/// (about one second at 30 fps).
pub const DEFAULT_CONFIRM_FRAMES: u32 = 30;

/// One-shot consecutive-frame latch.  One instance exists per gesture kind
/// for the lifetime of the engine.
#[derive(Debug, Clone)]
pub struct DebounceTracker {
    threshold: u32,
    consecutive_matches: u32,
    fired: bool,
}

impl DebounceTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            consecutive_matches: 0,
            fired: false,
        }
    }

    /// Feed one frame's classification.  Returns true exactly at the moment
    /// the gesture confirms; every other call returns false.
    ///
    /// A negative frame resets the run and re-arms the latch unconditionally.
    pub fn update(&mut self, is_match: bool) -> bool {
        if !is_match {
            self.consecutive_matches = 0;
            self.fired = false;
            return false;
        }

        self.consecutive_matches = self.consecutive_matches.saturating_add(1);
        if self.consecutive_matches >= self.threshold && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirms_exactly_on_threshold_call() {
        let mut tracker = DebounceTracker::new(30);
        for call in 1..=60u32 {
            let confirmed = tracker.update(true);
            assert_eq!(confirmed, call == 30, "unexpected result on call {call}");
        }
    }

    #[test]
    fn test_below_threshold_never_confirms() {
        let mut tracker = DebounceTracker::new(30);
        for _ in 0..29 {
            assert!(!tracker.update(true));
        }
    }

    #[test]
    fn test_negative_frame_resets_state() {
        let mut tracker = DebounceTracker::new(5);
        for _ in 0..4 {
            tracker.update(true);
        }
        assert!(!tracker.update(false));
        assert_eq!(tracker.consecutive_matches, 0);
        assert!(!tracker.fired);

        // The run starts over from zero.
        for call in 1..=5u32 {
            assert_eq!(tracker.update(true), call == 5);
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut tracker = DebounceTracker::new(5);
        tracker.update(false);
        tracker.update(false);
        assert_eq!(tracker.consecutive_matches, 0);
        assert!(!tracker.fired);
    }

    #[test]
    fn test_rearm_requires_release() {
        let mut tracker = DebounceTracker::new(3);
        assert!(!tracker.update(true));
        assert!(!tracker.update(true));
        assert!(tracker.update(true));

        // Held past the threshold: never fires again.
        for _ in 0..100 {
            assert!(!tracker.update(true));
        }

        // One negative frame re-arms.
        tracker.update(false);
        assert!(!tracker.update(true));
        assert!(!tracker.update(true));
        assert!(tracker.update(true));
    }

    #[test]
    fn test_threshold_one_fires_immediately() {
        let mut tracker = DebounceTracker::new(1);
        assert!(tracker.update(true));
        assert!(!tracker.update(true));
        tracker.update(false);
        assert!(tracker.update(true));
    }
}
