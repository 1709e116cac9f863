// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core carousel rules with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`carousel`]: Timing and geometry value objects
//!   ([`AdvanceInterval`](carousel::AdvanceInterval),
//!   [`TransitionDelay`](carousel::TransitionDelay),
//!   [`SwipeThreshold`](carousel::SwipeThreshold),
//!   [`MarqueeSpeed`](carousel::MarqueeSpeed))

pub mod carousel;
