// SPDX-License-Identifier: GPL-3.0-only

//! Camera permission prompt

use crate::app::state::{AppModel, Message};
use crate::app::view::rounded_fill;
use crate::constants::colors;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Message and a single retry action, shown after access was denied.
    ///
    /// Pressing the button asks the provider once; nothing retries on its own.
    pub fn build_permission_prompt(&self) -> Element<'_, Message> {
        let button_label = widget::container(
            widget::text(fl!("grant-permission"))
                .size(16)
                .font(cosmic::font::bold())
                .class(cosmic::theme::Text::Color(Color::WHITE)),
        )
        .padding([12, 20])
        .style(rounded_fill(colors::PERMISSION_BLUE, 8.0));

        let grant_button = widget::button::custom(button_label)
            .padding(0)
            .class(cosmic::theme::Button::Text)
            .on_press(Message::RequestPermission);

        let content = widget::column()
            .push(
                widget::text(fl!("permission-message"))
                    .size(18)
                    .class(cosmic::theme::Text::Color(Color::WHITE)),
            )
            .push(widget::vertical_space().height(20))
            .push(grant_button)
            .align_x(Alignment::Center);

        widget::container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .padding(20)
            .style(rounded_fill(Color::BLACK, 0.0))
            .into()
    }
}
