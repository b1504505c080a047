// SPDX-License-Identifier: MPL-2.0

//! Mode switcher widget implementation (AUDIO / VIDEO toggle)

use crate::app::state::{AppModel, Message};
use crate::app::view::rounded_fill;
use crate::constants::{colors, ui};
use crate::session::CaptureMode;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Build the mode switcher widget
    ///
    /// The active mode gets gold text on a translucent gold pill. Pressing
    /// either entry writes the shared mode, which also recolors the tab bar.
    pub fn build_mode_switcher(&self, active: CaptureMode) -> Element<'_, Message> {
        let mut row = widget::row().spacing(20);

        for mode in CaptureMode::ALL {
            let is_active = mode == active;
            let (text_color, background) = if is_active {
                (colors::ACCENT_GOLD, colors::ACCENT_GOLD_SOFT)
            } else {
                (colors::CHIP_TEXT, colors::OVERLAY_DIM)
            };

            let pill = widget::container(
                widget::text(mode.label())
                    .size(ui::CHIP_TEXT_SIZE)
                    .font(cosmic::font::bold())
                    .class(cosmic::theme::Text::Color(text_color)),
            )
            .padding([8, 20])
            .style(rounded_fill(background, 20.0));

            row = row.push(
                widget::button::custom(pill)
                    .padding(0)
                    .class(cosmic::theme::Button::Image)
                    .on_press(Message::SetCaptureMode(mode)),
            );
        }

        widget::container(row)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }
}
