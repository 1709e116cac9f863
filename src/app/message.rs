// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel::TransitionTicket;
use crate::config::ForcedMode;
use iced::{window, Point, Size};
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Slideshow auto-advance timer fired.
    AutoAdvance(Instant),
    /// Marquee frame tick.
    Frame(Instant),
    WindowResized(Size),
    /// Left mouse button went down at the last known cursor position.
    PointerPressed,
    PointerMoved(Point),
    PointerReleased,
    /// Cursor left the window; the gesture in progress is dropped.
    PointerLeft,
    FingerPressed(Point),
    FingerMoved(Point),
    FingerLifted,
    /// The platform lost track of the touch.
    FingerLost,
    /// A card or indicator dot was pressed.
    SelectItem(usize),
    MarqueeHovered(bool),
    /// The transition delay scheduled for this ticket ran out.
    TransitionElapsed(TransitionTicket),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Pins the presentation instead of following the window width.
    pub mode: Option<ForcedMode>,
    /// Optional TOML catalog replacing the built-in showcase.
    pub catalog_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SHOWCASE_CAROUSEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
