// SPDX-License-Identifier: MPL-2.0
//! Carousel newtypes.
//!
//! This module provides type-safe wrappers for carousel timing and geometry
//! values, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Auto-Advance Interval
// =============================================================================

/// Slideshow auto-advance bounds (1 to 60 seconds).
pub mod interval_bounds {
    /// Minimum interval in milliseconds.
    pub const MIN_MS: u64 = 1_000;
    /// Maximum interval in milliseconds.
    pub const MAX_MS: u64 = 60_000;
    /// Default interval in milliseconds.
    pub const DEFAULT_MS: u64 = 5_000;
}

/// Period between two slideshow advances.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use showcase_carousel::domain::carousel::AdvanceInterval;
///
/// let interval = AdvanceInterval::new(5_000);
/// assert_eq!(interval.as_duration().as_secs(), 5);
///
/// // Values outside range are clamped
/// assert_eq!(AdvanceInterval::new(10).millis(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceInterval(u64);

impl AdvanceInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(interval_bounds::MIN_MS, interval_bounds::MAX_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AdvanceInterval {
    fn default() -> Self {
        Self(interval_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Transition Delay
// =============================================================================

/// Rotation transition bounds (50 ms to 2 seconds).
pub mod transition_bounds {
    /// Minimum delay in milliseconds.
    pub const MIN_MS: u64 = 50;
    /// Maximum delay in milliseconds.
    pub const MAX_MS: u64 = 2_000;
    /// Default delay in milliseconds.
    pub const DEFAULT_MS: u64 = 300;
}

/// Time between a committed swipe and the rotation taking effect.
///
/// The transition lock is held for exactly this long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDelay(u64);

impl TransitionDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(transition_bounds::MIN_MS, transition_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDelay {
    fn default() -> Self {
        Self(transition_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Swipe Threshold
// =============================================================================

/// Swipe commit threshold bounds (10 to 400 device-independent pixels).
pub mod threshold_bounds {
    /// Minimum threshold in pixels.
    pub const MIN_PX: f32 = 10.0;
    /// Maximum threshold in pixels.
    pub const MAX_PX: f32 = 400.0;
    /// Default threshold in pixels.
    pub const DEFAULT_PX: f32 = 80.0;
}

/// Minimum absolute horizontal offset a swipe needs to commit a rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to valid range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if !px.is_finite() {
            return Self::default();
        }
        Self(px.clamp(threshold_bounds::MIN_PX, threshold_bounds::MAX_PX))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when `offset` commits. The comparison is strict, so an
    /// offset exactly at the threshold does not commit.
    #[must_use]
    pub fn is_exceeded_by(self, offset: f32) -> bool {
        offset.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(threshold_bounds::DEFAULT_PX)
    }
}

// =============================================================================
// Marquee Speed
// =============================================================================

/// Marquee drift bounds (0 to 400 pixels per second).
pub mod marquee_bounds {
    /// Minimum speed; zero disables the drift.
    pub const MIN_PX_PER_SEC: f32 = 0.0;
    /// Maximum speed.
    pub const MAX_PX_PER_SEC: f32 = 400.0;
    /// Default speed.
    pub const DEFAULT_PX_PER_SEC: f32 = 40.0;
}

/// Continuous marquee drift speed in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeSpeed(f32);

impl MarqueeSpeed {
    /// Creates a new speed, clamping to valid range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(px_per_sec: f32) -> Self {
        if !px_per_sec.is_finite() {
            return Self::default();
        }
        Self(px_per_sec.clamp(
            marquee_bounds::MIN_PX_PER_SEC,
            marquee_bounds::MAX_PX_PER_SEC,
        ))
    }

    /// Returns the speed in pixels per second.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the marquee does not drift at all.
    #[must_use]
    pub fn is_stopped(self) -> bool {
        self.0 <= marquee_bounds::MIN_PX_PER_SEC
    }

    /// Distance covered during `elapsed`.
    #[must_use]
    pub fn distance(self, elapsed: Duration) -> f32 {
        self.0 * elapsed.as_secs_f32()
    }
}

impl Default for MarqueeSpeed {
    fn default() -> Self {
        Self(marquee_bounds::DEFAULT_PX_PER_SEC)
    }
}

// =============================================================================
// Card Stride
// =============================================================================

/// Card stride bounds (card width plus gap, 120 to 1200 pixels).
pub mod stride_bounds {
    /// Minimum stride in pixels.
    pub const MIN_PX: f32 = 120.0;
    /// Maximum stride in pixels.
    pub const MAX_PX: f32 = 1_200.0;
    /// Default stride in pixels (380 px card + 24 px gap).
    pub const DEFAULT_PX: f32 = 404.0;
}

/// Horizontal distance between the leading edges of two adjacent cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStride(f32);

impl CardStride {
    /// Creates a new stride, clamping to valid range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if !px.is_finite() {
            return Self::default();
        }
        Self(px.clamp(stride_bounds::MIN_PX, stride_bounds::MAX_PX))
    }

    /// Returns the stride in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for CardStride {
    fn default() -> Self {
        Self(stride_bounds::DEFAULT_PX)
    }
}
