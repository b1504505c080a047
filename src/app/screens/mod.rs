// SPDX-License-Identifier: GPL-3.0-only

//! Screens, one per tab
//!
//! - Video: permission gate, then the live preview with recording controls
//! - Time-Lapse, Slo-Mo, Photo, Portrait: static text on a dark background.
//!   Time-Lapse's switch to Audio happens in its tab entry action, not here.

pub mod permission;
pub mod video;

use crate::app::state::Message;
use crate::app::view::rounded_fill;
use crate::constants::colors;
use cosmic::Element;
use cosmic::iced::{Alignment, Color, Length};
use cosmic::widget;

/// Centered title and subtitle on the placeholder background
pub fn build_placeholder_screen<'a>(title: String, subtitle: String) -> Element<'a, Message> {
    let content = widget::column()
        .push(
            widget::text(title)
                .size(24)
                .font(cosmic::font::bold())
                .class(cosmic::theme::Text::Color(Color::WHITE)),
        )
        .push(widget::vertical_space().height(10))
        .push(
            widget::text(subtitle)
                .size(16)
                .class(cosmic::theme::Text::Color(colors::CHIP_TEXT)),
        )
        .align_x(Alignment::Center);

    widget::container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .style(rounded_fill(colors::PLACEHOLDER_BACKGROUND, 0.0))
        .into()
}
