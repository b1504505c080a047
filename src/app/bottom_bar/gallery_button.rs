// SPDX-License-Identifier: MPL-2.0

//! Gallery thumbnail placeholder

use crate::app::state::{AppModel, Message};
use crate::constants::{colors, ui};
use cosmic::Element;
use cosmic::iced::{Background, Border, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the gallery thumbnail
    ///
    /// Nothing is ever captured, so this is an empty framed square.
    pub fn build_gallery_button(&self) -> Element<'_, Message> {
        widget::container(widget::Space::new(
            Length::Fixed(ui::THUMBNAIL_SIZE),
            Length::Fixed(ui::THUMBNAIL_SIZE),
        ))
        .style(|_theme| widget::container::Style {
            background: Some(Background::Color(colors::THUMBNAIL_FILL)),
            border: Border {
                radius: ui::THUMBNAIL_RADIUS.into(),
                width: 2.0,
                color: Color::WHITE,
            },
            ..Default::default()
        })
        .into()
    }
}
