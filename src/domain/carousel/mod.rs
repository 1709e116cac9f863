// SPDX-License-Identifier: MPL-2.0
//! Carousel domain types.
//!
//! Timing and geometry values shared by the control logic and the
//! configuration layer, independent of any presentation framework.

mod newtypes;

pub use newtypes::{
    interval_bounds, marquee_bounds, stride_bounds, threshold_bounds, transition_bounds,
    AdvanceInterval, CardStride, MarqueeSpeed, SwipeThreshold, TransitionDelay,
};
