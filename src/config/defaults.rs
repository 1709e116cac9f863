// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slideshow**: Auto-advance period
//! - **Swipe**: Commit threshold and transition delay
//! - **Marquee**: Drift speed and card stride
//! - **Display**: Compact-mode breakpoint

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default period between two slideshow advances (in milliseconds).
pub const DEFAULT_ADVANCE_INTERVAL_MS: u64 = 5_000;

/// Minimum auto-advance period (in milliseconds).
pub const MIN_ADVANCE_INTERVAL_MS: u64 = 1_000;

/// Maximum auto-advance period (in milliseconds).
pub const MAX_ADVANCE_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Default swipe commit threshold (device-independent pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 80.0;

/// Minimum swipe commit threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe commit threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Default delay before a committed rotation takes effect (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Minimum transition delay (in milliseconds).
pub const MIN_TRANSITION_MS: u64 = 50;

/// Maximum transition delay (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2_000;

// ==========================================================================
// Marquee Defaults
// ==========================================================================

/// Default marquee drift speed (pixels per second).
pub const DEFAULT_MARQUEE_SPEED_PX_PER_SEC: f32 = 40.0;

/// Maximum marquee drift speed (pixels per second).
pub const MAX_MARQUEE_SPEED_PX_PER_SEC: f32 = 400.0;

/// Default distance between two card leading edges (380 px card + 24 px gap).
pub const DEFAULT_CARD_STRIDE_PX: f32 = 404.0;

/// Interval of the frame tick driving the marquee (in milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Window widths strictly below this value use the compact slideshow.
pub const DEFAULT_COMPACT_BREAKPOINT_PX: f32 = 768.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Slideshow validation
    assert!(MIN_ADVANCE_INTERVAL_MS > 0);
    assert!(DEFAULT_ADVANCE_INTERVAL_MS >= MIN_ADVANCE_INTERVAL_MS);
    assert!(DEFAULT_ADVANCE_INTERVAL_MS <= MAX_ADVANCE_INTERVAL_MS);

    // Swipe validation
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    assert!(MIN_TRANSITION_MS > 0);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);

    // The lock must be free again well before the next slideshow tick.
    assert!(MAX_TRANSITION_MS < MIN_ADVANCE_INTERVAL_MS * 3);

    // Marquee validation
    assert!(DEFAULT_MARQUEE_SPEED_PX_PER_SEC <= MAX_MARQUEE_SPEED_PX_PER_SEC);
    assert!(DEFAULT_CARD_STRIDE_PX > 0.0);
    assert!(FRAME_INTERVAL_MS > 0);

    // Display validation
    assert!(DEFAULT_COMPACT_BREAKPOINT_PX > 0.0);
};
