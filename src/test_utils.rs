// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Offsets, marquee phases and speeds are `f32`; this module re-exports the
//! `approx` assertion macros so tests never compare them with `assert_eq!`
//! after arithmetic.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
