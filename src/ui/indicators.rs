// SPDX-License-Identifier: MPL-2.0
//! Dot indicators under the slideshow.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, row, Space};
use iced::{Element, Length};

/// One dot per `(index, is_active)` pair; pressing a dot emits `on_select(index)`.
pub fn view<'a, Message: Clone + 'a>(
    indicators: impl Iterator<Item = (usize, bool)>,
    on_select: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    row(indicators.map(|(index, active)| {
        let width = if active {
            sizing::INDICATOR_ACTIVE
        } else {
            sizing::INDICATOR_DOT
        };
        button(Space::new())
            .width(Length::Fixed(width))
            .height(Length::Fixed(sizing::INDICATOR_DOT))
            .padding(0)
            .on_press(on_select(index))
            .style(styles::button::indicator(active))
            .into()
    }))
    .spacing(spacing::XS)
    .into()
}
