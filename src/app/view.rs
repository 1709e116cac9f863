// SPDX-License-Identifier: MPL-2.0
//! Renderer: draws what the carousel reports for the current frame.

use super::Message;
use crate::carousel::{Carousel, Mode};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{card, indicators, strip};
use iced::alignment::Horizontal;
use iced::widget::{column, container, mouse_area, text, Space};
use iced::{Element, Length, Size};

const HEADING: &str = "Showcase";

/// Widest the slideshow card is allowed to grow.
const SLIDESHOW_MAX_WIDTH: f32 = 520.0;

pub fn view<'a>(
    carousel: Option<&'a Carousel>,
    viewport: Size,
    load_error: Option<&'a str>,
) -> Element<'a, Message> {
    let content = match carousel {
        Some(carousel) => match carousel.mode() {
            Mode::Slideshow => slideshow(carousel),
            Mode::Queue => queue(carousel, viewport),
        },
        None => text(load_error.unwrap_or("No showcase loaded"))
            .size(typography::BODY)
            .into(),
    };

    container(
        column![text(HEADING).size(typography::TITLE_LG), content]
            .spacing(spacing::LG)
            .align_x(Horizontal::Center),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn slideshow(carousel: &Carousel) -> Element<'_, Message> {
    let current: Element<'_, Message> = match carousel.active_item() {
        Some(item) => card::view(item, Length::Fill),
        None => Space::new().into(),
    };

    column![
        container(current).max_width(SLIDESHOW_MAX_WIDTH),
        indicators::view(carousel.indicators(), Message::SelectItem),
    ]
    .spacing(spacing::MD)
    .align_x(Horizontal::Center)
    .into()
}

fn queue(carousel: &Carousel, viewport: Size) -> Element<'_, Message> {
    let (Some(order), Some(marquee)) = (carousel.display_order(), carousel.marquee()) else {
        return Space::new().into();
    };

    let stride = marquee.stride();
    let window = marquee.window(
        order,
        carousel.live_offset(),
        strip::visible_count(viewport.width, stride),
    );
    let row = mouse_area(strip::view(
        carousel.catalog(),
        &window,
        stride,
        Message::SelectItem,
    ))
    .on_enter(Message::MarqueeHovered(true))
    .on_exit(Message::MarqueeHovered(false));

    column![
        row,
        indicators::view(carousel.indicators(), Message::SelectItem),
    ]
    .spacing(spacing::MD)
    .align_x(Horizontal::Center)
    .into()
}
