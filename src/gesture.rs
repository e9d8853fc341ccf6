// Gesture interpreter - classifies horizontal drags into navigation intents
//
// Fed by mouse press/drag/release events carrying cell coordinates. A gesture
// is "claimed" once its movement is predominantly horizontal and exceeds a
// small capture distance; from then on the pager's offset tracks dx 1:1 for
// live feedback. On release the final dx either crosses the swipe threshold
// (emitting Next/Previous, mirrored under RTL) or the gesture is cancelled
// and the offset springs back to zero.
//
// The interpreter emits intents only. Persistence and index management live
// in the session controller; whether a gesture may start at all (e.g. during
// a transition animation) is the caller's decision.

use crate::catalog::TextDirection;

/// Default swipe-accept distance in terminal cells.
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 6;
/// Default capture distance in terminal cells.
pub const DEFAULT_CAPTURE_DISTANCE: i32 = 2;

/// Discrete outcome of a released gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    Next,
    Previous,
    /// Sub-threshold release: spring the offset back to zero.
    Cancel,
}

/// Tracks one in-flight drag gesture.
#[derive(Debug)]
pub struct SwipeTracker {
    swipe_threshold: i32,
    capture_distance: i32,
    /// Press origin; `None` when no gesture is in flight.
    origin: Option<(i32, i32)>,
    claimed: bool,
}

impl SwipeTracker {
    pub fn new(swipe_threshold: i32, capture_distance: i32) -> Self {
        Self {
            swipe_threshold,
            capture_distance,
            origin: None,
            claimed: false,
        }
    }

    /// Whether the current gesture has been claimed for horizontal paging.
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Start tracking at the press position.
    pub fn begin(&mut self, x: i32, y: i32) {
        self.origin = Some((x, y));
        self.claimed = false;
    }

    /// Process a drag sample. Returns the live horizontal offset once the
    /// gesture is claimed, `None` while it is not (the event falls through
    /// to other interaction handling, e.g. list scrolling).
    ///
    /// The capture predicate is evaluated on each sample until it passes;
    /// once claimed it is never re-evaluated for this gesture.
    pub fn drag(&mut self, x: i32, y: i32) -> Option<i32> {
        let (ox, oy) = self.origin?;
        let dx = x - ox;
        let dy = y - oy;

        if !self.claimed && dx.abs() > dy.abs() && dx.abs() > self.capture_distance {
            self.claimed = true;
        }

        self.claimed.then_some(dx)
    }

    /// Process the release. Returns `None` when the gesture was never
    /// claimed; otherwise the classified intent. Resets the tracker.
    ///
    /// Direction mapping: dragging left (dx < 0) means "next" in LTR
    /// layouts and is mirrored under RTL.
    pub fn release(&mut self, x: i32, _y: i32, layout: TextDirection) -> Option<SwipeIntent> {
        let (ox, _) = self.origin.take()?;
        let claimed = std::mem::replace(&mut self.claimed, false);
        if !claimed {
            return None;
        }

        let dx = x - ox;
        if dx.abs() <= self.swipe_threshold {
            return Some(SwipeIntent::Cancel);
        }

        let intent = match (dx < 0, layout) {
            (true, TextDirection::Ltr) | (false, TextDirection::Rtl) => SwipeIntent::Next,
            (false, TextDirection::Ltr) | (true, TextDirection::Rtl) => SwipeIntent::Previous,
        };
        Some(intent)
    }

    /// Abandon any in-flight gesture (focus loss, view switch).
    pub fn reset(&mut self) {
        self.origin = None;
        self.claimed = false;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD, DEFAULT_CAPTURE_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tracker with the reference thresholds from the touch UI.
    fn touch_tracker() -> SwipeTracker {
        SwipeTracker::new(50, 10)
    }

    #[test]
    fn test_left_swipe_past_threshold_is_next() {
        let mut t = touch_tracker();
        t.begin(100, 20);
        assert_eq!(t.drag(40, 25), Some(-60)); // dx = -60, dy = 5
        assert_eq!(t.release(40, 25, TextDirection::Ltr), Some(SwipeIntent::Next));
    }

    #[test]
    fn test_sub_threshold_release_is_cancel() {
        let mut t = touch_tracker();
        t.begin(100, 20);
        assert_eq!(t.drag(130, 22), Some(30)); // dx = 30, dy = 2: claimed
        assert_eq!(
            t.release(130, 22, TextDirection::Ltr),
            Some(SwipeIntent::Cancel)
        );
    }

    #[test]
    fn test_right_swipe_is_previous() {
        let mut t = touch_tracker();
        t.begin(10, 0);
        t.drag(80, 3);
        assert_eq!(
            t.release(80, 3, TextDirection::Ltr),
            Some(SwipeIntent::Previous)
        );
    }

    #[test]
    fn test_rtl_mirrors_direction() {
        let mut t = touch_tracker();
        t.begin(100, 0);
        t.drag(40, 0); // dx = -60: Next under LTR
        assert_eq!(
            t.release(40, 0, TextDirection::Rtl),
            Some(SwipeIntent::Previous)
        );

        t.begin(10, 0);
        t.drag(80, 0);
        assert_eq!(t.release(80, 0, TextDirection::Rtl), Some(SwipeIntent::Next));
    }

    #[test]
    fn test_vertical_gesture_never_claims() {
        let mut t = touch_tracker();
        t.begin(50, 0);
        // |dx| <= |dy| on every sample: scrolling, not paging
        assert_eq!(t.drag(55, 30), None);
        assert_eq!(t.drag(60, 80), None);
        assert!(!t.is_claimed());
        assert_eq!(t.release(60, 80, TextDirection::Ltr), None);
    }

    #[test]
    fn test_small_horizontal_move_not_captured() {
        let mut t = touch_tracker();
        t.begin(50, 0);
        assert_eq!(t.drag(55, 1), None); // |dx| = 5 <= capture distance 10
        assert!(!t.is_claimed());
    }

    #[test]
    fn test_claim_sticks_once_taken() {
        let mut t = touch_tracker();
        t.begin(0, 0);
        assert_eq!(t.drag(20, 0), Some(20)); // claimed
        // Later samples become vertical-dominant; the claim is not revisited
        assert_eq!(t.drag(5, 40), Some(5));
        assert!(t.is_claimed());
    }

    #[test]
    fn test_release_without_begin_is_none() {
        let mut t = touch_tracker();
        assert_eq!(t.release(10, 10, TextDirection::Ltr), None);
    }

    #[test]
    fn test_reset_abandons_gesture() {
        let mut t = touch_tracker();
        t.begin(0, 0);
        t.drag(30, 0);
        t.reset();
        assert_eq!(t.release(60, 0, TextDirection::Ltr), None);
    }

    #[test]
    fn test_exact_threshold_is_cancel() {
        // The predicate is strictly greater-than
        let mut t = touch_tracker();
        t.begin(0, 0);
        t.drag(50, 0);
        assert_eq!(
            t.release(50, 0, TextDirection::Ltr),
            Some(SwipeIntent::Cancel)
        );
    }
}
