// SPDX-License-Identifier: MPL-2.0

//! Zoom chips (display only)

use crate::app::state::{AppModel, Message};
use crate::app::view::rounded_fill;
use crate::constants::{colors, ui};
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Build the zoom chip row. The chips carry no action.
    pub fn build_zoom_chips(&self) -> Element<'_, Message> {
        let mut row = widget::row().spacing(8);

        for (index, label) in ui::ZOOM_CHIPS.into_iter().enumerate() {
            let (text_color, background) = if index == ui::ACTIVE_ZOOM_CHIP {
                (colors::ACCENT_GOLD, colors::ACCENT_GOLD_ZOOM)
            } else {
                (colors::CHIP_TEXT, colors::ZOOM_DIM)
            };

            row = row.push(
                widget::container(
                    widget::text(label)
                        .size(ui::CHIP_TEXT_SIZE)
                        .font(cosmic::font::bold())
                        .class(cosmic::theme::Text::Color(text_color)),
                )
                .padding([8, 16])
                .style(rounded_fill(background, ui::CHIP_RADIUS)),
            );
        }

        widget::container(row)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }
}
