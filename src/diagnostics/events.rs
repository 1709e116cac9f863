// SPDX-License-Identifier: MPL-2.0
//! Carousel event types for activity tracking.

use std::time::Instant;

/// Why an input produced no state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// A transition was in flight.
    TransitionInFlight,
    /// A gesture was already being tracked.
    GestureInProgress,
    /// The input does not apply to the active presentation.
    WrongMode,
}

/// What the controller did.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEventKind {
    // ==========================================================================
    // Slideshow
    // ==========================================================================
    /// The cursor moved forward on a timer tick.
    Advanced { cursor: usize },

    /// An item was selected explicitly (dot indicator).
    Selected { index: usize },

    // ==========================================================================
    // Queue
    // ==========================================================================
    /// A swipe committed; the rotation is pending.
    RotationScheduled { ticket: u64, offset: f32 },

    /// The pending rotation took effect.
    Rotated { front: usize },

    /// A swipe ended within the threshold.
    SwipeCancelled { offset: f32 },

    /// A pending rotation was discarded before taking effect.
    TransitionCancelled { ticket: u64 },

    // ==========================================================================
    // Shared
    // ==========================================================================
    /// An input was ignored by policy.
    Dropped { input: &'static str, reason: DropReason },

    /// The presentation switched.
    ModeChanged { compact: bool, front: usize },
}

/// A timestamped [`CarouselEventKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselEvent {
    pub kind: CarouselEventKind,
    pub at: Instant,
}

impl CarouselEvent {
    #[must_use]
    pub fn new(kind: CarouselEventKind, at: Instant) -> Self {
        Self { kind, at }
    }
}
