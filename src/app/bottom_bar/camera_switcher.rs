// SPDX-License-Identifier: GPL-3.0-only

//! Camera switcher button widget implementation

use crate::app::state::{AppModel, Message};
use crate::constants::{colors, ui};
use cosmic::Element;
use cosmic::iced::{Background, Border, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the camera flip button
    ///
    /// Always shown; with a single camera the flip selects the same device.
    pub fn build_camera_switcher(&self) -> Element<'_, Message> {
        let icon_widget =
            widget::icon::from_name("object-rotate-left-symbolic").size(ui::FLIP_ICON_SIZE);

        // Center icon in fixed-size container
        let icon_content = widget::container(icon_widget)
            .width(Length::Fixed(ui::FLIP_BUTTON_SIZE))
            .height(Length::Fixed(ui::FLIP_BUTTON_SIZE))
            .center(Length::Fixed(ui::FLIP_BUTTON_SIZE))
            .style(|_theme| widget::container::Style {
                text_color: Some(Color::WHITE),
                background: Some(Background::Color(colors::OVERLAY_DIM)),
                border: Border {
                    radius: (ui::FLIP_BUTTON_SIZE / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        widget::button::custom(icon_content)
            .padding(0)
            .class(cosmic::theme::Button::Image)
            .on_press(Message::FlipCamera)
            .into()
    }
}
