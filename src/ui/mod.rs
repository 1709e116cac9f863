// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Pure view builders in the Elm-style "state down, messages up" pattern.
//! Nothing here holds state: every function renders what the carousel
//! controller reports for the current frame.
//!
//! - [`card`] - Showcase item card
//! - [`strip`] - Marquee strip of the queue presentation
//! - [`indicators`] - Dot indicators of the slideshow
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod card;
pub mod design_tokens;
pub mod indicators;
pub mod strip;
pub mod styles;
pub mod theming;
