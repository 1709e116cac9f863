// SPDX-License-Identifier: MPL-2.0
//! Carousel control logic
//!
//! Host-independent state for the showcase carousel. Nothing in here owns a
//! timer or draws anything; the host feeds in ticks and pointer samples and
//! reads back the order, cursor and live offset each frame.

pub mod controller;
pub mod cursor;
pub mod gesture;
pub mod lock;
pub mod marquee;
pub mod queue;

// Re-export commonly used types for convenience
pub use controller::{Carousel, CarouselSettings, Effect, Mode};
pub use cursor::Cursor;
pub use gesture::{GestureOutcome, GestureState, SwipeTracker};
pub use lock::{TransitionLock, TransitionTicket};
pub use marquee::{MarqueeState, StripWindow};
pub use queue::DisplayOrder;
