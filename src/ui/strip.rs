// SPDX-License-Identifier: MPL-2.0
//! Marquee strip drawn by the queue presentation.

use crate::carousel::StripWindow;
use crate::catalog::Catalog;
use crate::domain::carousel::CardStride;
use crate::ui::card;
use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, row, Space};
use iced::{Element, Length};

/// Card width left once the gap is taken out of `stride`.
#[must_use]
pub fn card_width(stride: CardStride) -> f32 {
    (stride.value() - sizing::CARD_GAP).max(0.0)
}

/// Number of full slots needed to cover `viewport_width` after the leading card.
#[must_use]
pub fn visible_count(viewport_width: f32, stride: CardStride) -> usize {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return 1;
    }
    (viewport_width / stride.value()).ceil() as usize + 1
}

/// Lays out one frame of the strip.
///
/// Every slot is exactly one stride wide; the leading slot is clipped to the
/// part still in view.
pub fn view<'a, Message: Clone + 'a>(
    catalog: &'a Catalog,
    window: &StripWindow,
    stride: CardStride,
    on_select: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let slot = |index: usize| -> Element<'a, Message> {
        let Some(item) = catalog.get(index) else {
            return Space::new().width(Length::Fixed(stride.value())).into();
        };
        let card = button(card::view(item, Length::Fixed(card_width(stride))))
            .padding(0)
            .on_press(on_select(index))
            .style(styles::button::card);
        row![card, Space::new().width(Length::Fixed(sizing::CARD_GAP))].into()
    };

    let lead: Element<'a, Message> = container(slot(window.lead_item))
        .width(Length::Fixed(window.lead_visible))
        .align_x(Horizontal::Right)
        .clip(true)
        .into();

    let strip = row(std::iter::once(lead).chain(window.items.iter().map(|&index| slot(index))));

    container(strip).width(Length::Fill).clip(true).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn card_width_leaves_room_for_gap() {
        assert_abs_diff_eq!(card_width(CardStride::default()), sizing::CARD_WIDTH);
    }

    #[test]
    fn visible_count_covers_viewport() {
        let stride = CardStride::default();
        assert_eq!(visible_count(1280.0, stride), 5);
        assert_eq!(visible_count(404.0, stride), 2);
    }

    #[test]
    fn visible_count_handles_degenerate_viewports() {
        let stride = CardStride::default();
        assert_eq!(visible_count(0.0, stride), 1);
        assert_eq!(visible_count(f32::NAN, stride), 1);
    }
}
