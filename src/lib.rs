// SPDX-License-Identifier: MPL-2.0
//! `showcase_carousel` is a showcase carousel built with the Iced GUI framework.
//!
//! The [`carousel`] module holds the host-independent control logic: an
//! auto-advancing slideshow for compact windows and a swipe-driven rotating
//! queue with a drifting marquee for wide ones, serialized by a transition
//! lock. The [`app`] module hosts it in an iced window.

#![doc(html_root_url = "https://docs.rs/showcase_carousel/0.1.0")]

pub mod app;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
