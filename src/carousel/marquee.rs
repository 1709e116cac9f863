// SPDX-License-Identifier: MPL-2.0
//! Continuous wrap-around scroll of the display order.
//!
//! The marquee drifts leftward by a phase measured in pixels. The phase wraps
//! at one full catalog width, and card slots map to items through
//! [`DisplayOrder::wrapping`], so the strip looks infinite without repeating
//! the backing data.

use super::queue::DisplayOrder;
use crate::domain::carousel::{CardStride, MarqueeSpeed};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Items visible in the strip for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StripWindow {
    /// Item partially scrolled out at the leading edge.
    pub lead_item: usize,
    /// Width of the leading item still in view.
    pub lead_visible: f32,
    /// Items laid out after the leading one.
    pub items: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeState {
    phase: f32,
    hovered: bool,
    speed: MarqueeSpeed,
    stride: CardStride,
}

impl MarqueeState {
    #[must_use]
    pub fn new(speed: MarqueeSpeed, stride: CardStride) -> Self {
        Self {
            phase: 0.0,
            hovered: false,
            speed,
            stride,
        }
    }

    /// Moves the strip by the distance covered during `elapsed`.
    ///
    /// Nothing moves while hovered or while `held` (a gesture or transition
    /// owns the strip). Returns `true` if the phase changed.
    pub fn advance(&mut self, elapsed: Duration, len: NonZeroUsize, held: bool) -> bool {
        if self.hovered || held || self.speed.is_stopped() {
            return false;
        }
        let cycle = self.cycle_width(len);
        self.phase = (self.phase + self.speed.distance(elapsed)) % cycle;
        true
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pixels scrolled since the start of the current cycle.
    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[must_use]
    pub fn stride(&self) -> CardStride {
        self.stride
    }

    /// Cards to draw for one frame, with the strip dragged by `offset`.
    ///
    /// A positive offset pulls the strip rightward, against the drift.
    #[must_use]
    pub fn window(&self, order: &DisplayOrder, offset: f32, count: usize) -> StripWindow {
        let stride = self.stride.value();
        let position = (self.phase - offset).rem_euclid(self.cycle_width(order.len()));
        let slot = (position / stride).floor() as usize;
        let shift = position - slot as f32 * stride;

        StripWindow {
            lead_item: order.wrapping(slot),
            lead_visible: stride - shift,
            items: (slot + 1..=slot + count)
                .map(|slot| order.wrapping(slot))
                .collect(),
        }
    }

    fn cycle_width(&self, len: NonZeroUsize) -> f32 {
        self.stride.value() * len.get() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero")
    }

    fn marquee() -> MarqueeState {
        MarqueeState::new(MarqueeSpeed::new(100.0), CardStride::new(200.0))
    }

    #[test]
    fn advance_moves_by_speed() {
        let mut state = marquee();
        assert!(state.advance(Duration::from_millis(500), len(6), false));
        assert_abs_diff_eq!(state.phase(), 50.0, epsilon = 1e-3);
    }

    #[test]
    fn phase_wraps_at_catalog_width() {
        let mut state = marquee();
        // 3 items * 200 px = 600 px cycle; 7 s at 100 px/s = 700 px
        state.advance(Duration::from_secs(7), len(3), false);
        assert_abs_diff_eq!(state.phase(), 100.0, epsilon = 1e-3);
    }

    #[test]
    fn hover_pauses_drift() {
        let mut state = marquee();
        state.set_hovered(true);
        assert!(!state.advance(Duration::from_secs(1), len(6), false));
        assert_eq!(state.phase(), 0.0);
        state.set_hovered(false);
        assert!(state.advance(Duration::from_secs(1), len(6), false));
    }

    #[test]
    fn held_strip_does_not_move() {
        let mut state = marquee();
        assert!(!state.advance(Duration::from_secs(1), len(6), true));
        assert_eq!(state.phase(), 0.0);
    }

    #[test]
    fn zero_speed_never_moves() {
        let mut state = MarqueeState::new(MarqueeSpeed::new(0.0), CardStride::default());
        assert!(!state.advance(Duration::from_secs(10), len(6), false));
    }

    #[test]
    fn window_wraps_over_order() {
        let mut state = marquee();
        state.advance(Duration::from_millis(2_500), len(3), false); // 250 px

        let order = DisplayOrder::new(len(3));
        let window = state.window(&order, 0.0, 3);
        assert_eq!(window.lead_item, 1);
        assert_abs_diff_eq!(window.lead_visible, 150.0, epsilon = 1e-3);
        assert_eq!(window.items, vec![2, 0, 1]);
    }

    #[test]
    fn window_follows_drag_offset_in_both_directions() {
        let mut state = marquee();
        state.advance(Duration::from_millis(2_500), len(3), false); // 250 px
        let order = DisplayOrder::new(len(3));

        let right = state.window(&order, 100.0, 3);
        assert_eq!(right.lead_item, 0);
        assert_abs_diff_eq!(right.lead_visible, 50.0, epsilon = 1e-3);
        assert_eq!(right.items, vec![1, 2, 0]);

        // Dragging past the start of the cycle wraps to its end
        let far_right = state.window(&order, 300.0, 3);
        assert_eq!(far_right.lead_item, 2);
        assert_abs_diff_eq!(far_right.lead_visible, 50.0, epsilon = 1e-3);
        assert_eq!(far_right.items, vec![0, 1, 2]);
    }

    #[test]
    fn window_maps_slots_through_display_order() {
        let state = marquee();
        let order = DisplayOrder::starting_at(len(4), 2);
        let window = state.window(&order, 0.0, 2);
        assert_eq!(window.lead_item, 2);
        assert_abs_diff_eq!(window.lead_visible, 200.0, epsilon = 1e-3);
        assert_eq!(window.items, vec![3, 0]);
    }
}
