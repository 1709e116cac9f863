// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Slideshow indicator dot. The active dot is drawn in the brand color.
pub fn indicator(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = if active {
            palette::PRIMARY_500
        } else {
            theme.extended_palette().background.strong.color
        };
        let color = match status {
            button::Status::Hovered if !active => palette::PRIMARY_400,
            button::Status::Pressed => palette::PRIMARY_700,
            _ => base,
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: Color::TRANSPARENT,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Marquee card wrapper: invisible until hovered.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => Color {
            a: opacity::TRANSPARENT,
            ..palette::PRIMARY_500
        },
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
