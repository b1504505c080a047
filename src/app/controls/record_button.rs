// SPDX-License-Identifier: MPL-2.0

//! Record button widget implementation

use crate::app::state::{AppModel, Message};
use crate::constants::{colors, ui};
use cosmic::Element;
use cosmic::iced::{Background, Border, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the record button widget
    ///
    /// - Idle: red circle inside a white ring on a light tint
    /// - Recording: smaller red rounded square, the tint turns red
    ///
    /// Pressing it only flips the shared recording flag.
    pub fn build_record_button(&self, is_recording: bool) -> Element<'_, Message> {
        let (inner_size, inner_radius, ring_color) = if is_recording {
            (
                ui::RECORD_INNER_RECORDING,
                ui::RECORD_INNER_RECORDING_RADIUS,
                colors::RECORD_RING_RECORDING,
            )
        } else {
            (
                ui::RECORD_INNER_IDLE,
                ui::RECORD_INNER_IDLE / 2.0,
                colors::RECORD_RING_IDLE,
            )
        };

        let inner = widget::container(widget::Space::new(
            Length::Fixed(inner_size),
            Length::Fixed(inner_size),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(colors::RECORD_RED)),
            border: Border {
                radius: inner_radius.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let ring = widget::container(inner)
            .width(Length::Fixed(ui::RECORD_BUTTON_OUTER))
            .height(Length::Fixed(ui::RECORD_BUTTON_OUTER))
            .center(Length::Fixed(ui::RECORD_BUTTON_OUTER))
            .style(move |_theme| widget::container::Style {
                background: Some(Background::Color(ring_color)),
                border: Border {
                    radius: (ui::RECORD_BUTTON_OUTER / 2.0).into(),
                    width: ui::RECORD_BUTTON_BORDER,
                    color: Color::WHITE,
                },
                ..Default::default()
            });

        widget::button::custom(ring)
            .padding(0)
            .width(Length::Fixed(ui::RECORD_BUTTON_OUTER))
            .height(Length::Fixed(ui::RECORD_BUTTON_OUTER))
            .class(cosmic::theme::Button::Image)
            .on_press(Message::ToggleRecording)
            .into()
    }
}
