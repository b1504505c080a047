// SPDX-License-Identifier: MPL-2.0

//! Top row of the Video screen (close button, record timer, quality label)

use crate::app::state::{AppModel, Message};
use crate::app::view::rounded_fill;
use crate::constants::{colors, ui};
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Border, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the top control row
    pub fn build_top_controls(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        // Has no action attached
        let close_icon = widget::container(widget::icon::from_name("window-close-symbolic").size(24))
            .width(Length::Fixed(ui::CLOSE_BUTTON_SIZE))
            .height(Length::Fixed(ui::CLOSE_BUTTON_SIZE))
            .center(Length::Fixed(ui::CLOSE_BUTTON_SIZE))
            .style(|_theme| widget::container::Style {
                text_color: Some(Color::WHITE),
                background: Some(Background::Color(colors::OVERLAY_DIM)),
                border: Border {
                    radius: (ui::CLOSE_BUTTON_SIZE / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            });
        let close_button = widget::button::custom(close_icon)
            .padding(0)
            .class(cosmic::theme::Button::Image)
            .on_press(Message::CloseRequested);

        let quality_label = widget::text(ui::QUALITY_LABEL)
            .size(ui::TOP_LABEL_TEXT_SIZE)
            .font(cosmic::font::bold())
            .class(cosmic::theme::Text::Color(Color::WHITE));

        // Equal-width side slots keep the timer centered
        let left = widget::container(close_button)
            .width(Length::Fill)
            .align_x(cosmic::iced::alignment::Horizontal::Left);
        let right = widget::container(quality_label)
            .width(Length::Fill)
            .align_x(cosmic::iced::alignment::Horizontal::Right);

        widget::row()
            .push(left)
            .push(self.build_record_timer())
            .push(right)
            .align_y(Alignment::Center)
            .padding([spacing.space_l, 20])
            .width(Length::Fill)
            .into()
    }

    /// Build the record timer pill
    ///
    /// Red dot and `MM:SS`, always visible; shows `00:00` while not recording.
    pub fn build_record_timer(&self) -> Element<'_, Message> {
        let red_dot = widget::container(widget::Space::new(
            Length::Fixed(ui::RECORDING_DOT_SIZE),
            Length::Fixed(ui::RECORDING_DOT_SIZE),
        ))
        .style(rounded_fill(colors::RECORD_RED, ui::RECORDING_DOT_SIZE / 2.0));

        let row = widget::row()
            .push(red_dot)
            .push(widget::horizontal_space().width(8))
            .push(
                widget::text(self.record_timer.display())
                    .size(ui::TOP_LABEL_TEXT_SIZE)
                    .font(cosmic::font::bold())
                    .class(cosmic::theme::Text::Color(Color::WHITE)),
            )
            .align_y(Alignment::Center);

        widget::container(row)
            .padding([6, 12])
            .style(rounded_fill(colors::OVERLAY_DIM, ui::CHIP_RADIUS))
            .into()
    }
}
