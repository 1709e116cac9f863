// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture tracking
//!
//! Follows one pointer or touch interaction from press to release and turns
//! it into a live horizontal offset plus a commit/cancel decision.

use crate::domain::carousel::SwipeThreshold;
use iced::Point;

/// Transient data for the gesture in progress.
///
/// Only exists while tracking; every return to idle drops it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    /// Position where the gesture started
    pub start: Point,

    /// Horizontal distance from the start to the latest sample
    pub offset: f32,
}

/// How a finished gesture resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// The offset went past the threshold.
    Commit { offset: f32 },
    /// The offset stayed within the threshold.
    Cancel { offset: f32 },
}

/// `Idle -> Tracking -> Idle` state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SwipeTracker {
    #[default]
    Idle,
    Tracking(GestureState),
}

impl SwipeTracker {
    /// Starts tracking at `position`.
    ///
    /// A gesture already in progress is never re-armed; returns `false` then.
    pub fn start(&mut self, position: Point) -> bool {
        if self.is_tracking() {
            return false;
        }
        *self = SwipeTracker::Tracking(GestureState {
            start: position,
            offset: 0.0,
        });
        true
    }

    /// Recomputes the live offset from a move sample.
    ///
    /// Vertical displacement is ignored. Returns `None` when idle.
    pub fn update(&mut self, position: Point) -> Option<f32> {
        match self {
            SwipeTracker::Idle => None,
            SwipeTracker::Tracking(state) => {
                state.offset = position.x - state.start.x;
                Some(state.offset)
            }
        }
    }

    /// Ends the gesture and evaluates it against `threshold`.
    ///
    /// Returns `None` when no gesture was in progress.
    pub fn finish(&mut self, threshold: SwipeThreshold) -> Option<GestureOutcome> {
        let SwipeTracker::Tracking(state) = std::mem::take(self) else {
            return None;
        };

        if threshold.is_exceeded_by(state.offset) {
            Some(GestureOutcome::Commit {
                offset: state.offset,
            })
        } else {
            Some(GestureOutcome::Cancel {
                offset: state.offset,
            })
        }
    }

    /// Discards the gesture in progress without evaluating it.
    ///
    /// Returns `true` if a gesture was discarded.
    pub fn cancel(&mut self) -> bool {
        matches!(std::mem::take(self), SwipeTracker::Tracking(_))
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self, SwipeTracker::Tracking(_))
    }

    /// Live horizontal offset; 0 when idle.
    #[must_use]
    pub fn offset(&self) -> f32 {
        match self {
            SwipeTracker::Idle => 0.0,
            SwipeTracker::Tracking(state) => state.offset,
        }
    }
}
