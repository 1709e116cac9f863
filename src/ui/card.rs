// SPDX-License-Identifier: MPL-2.0
//! Showcase item card.

use crate::catalog::Item;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{column, container, row, text, Column};
use iced::{Element, Length};

const NO_IMAGE: &str = "no image";

/// Renders `item` as a card of the given `width`.
///
/// The image area shows the asset name; decoding assets is left to the
/// embedding page.
pub fn view<'a, Message: 'a>(item: &'a Item, width: Length) -> Element<'a, Message> {
    let caption = item.image.as_deref().unwrap_or(NO_IMAGE);
    let image = container(text(caption).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::image_placeholder);

    let tags = row(item.tags.iter().map(|tag| {
        container(text(tag).size(typography::CAPTION))
            .padding([spacing::XXS / 2.0, spacing::XS])
            .style(styles::container::tag)
            .into()
    }))
    .spacing(spacing::XS);

    let body: Column<'a, Message> = column![
        text(&item.title).size(typography::TITLE_SM),
        text(&item.description).size(typography::BODY),
        tags,
    ]
    .spacing(spacing::SM);

    container(column![image, body].spacing(spacing::MD))
        .padding(spacing::MD)
        .width(width)
        .style(styles::container::card)
        .into()
}
