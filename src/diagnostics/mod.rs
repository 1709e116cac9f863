// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for carousel activity.
//!
//! Every committed or dropped control action is recorded as a
//! [`CarouselEvent`] in a memory-bounded [`CircularBuffer`], so the renderer
//! and tests can inspect what the controller did without parsing logs.
//! [`ActivitySummary`] condenses the buffer into per-kind counts; the host
//! logs it when the carousel is unmounted.

mod buffer;
mod events;
mod summary;

pub use buffer::{CircularBuffer, DEFAULT_EVENT_CAPACITY};
pub use events::{CarouselEvent, CarouselEventKind, DropReason};
pub use summary::ActivitySummary;
