// SPDX-License-Identifier: MPL-2.0

//! Camera preview module
//!
//! Shows the latest preview frame (black until one arrives), the optional
//! rule-of-thirds grid, and the Audio-mode letterbox.

use crate::app::state::{AppModel, Message};
use crate::app::view::{black_fill, rounded_fill};
use crate::constants::{colors, ui};
use crate::session::CaptureMode;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Build the preview area for `mode`
    pub fn build_camera_preview(&self, mode: CaptureMode) -> Element<'_, Message> {
        let image: Element<'_, Message> = match &self.current_frame {
            Some(frame) => widget::image::Image::new(frame.clone())
                .content_fit(cosmic::iced::ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => black_fill(),
        };

        let preview: Element<'_, Message> = if self.config.show_grid {
            cosmic::iced::widget::stack![image, build_grid_overlay()]
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            image
        };

        match mode {
            CaptureMode::Video => preview,
            CaptureMode::Audio => widget::column()
                .push(letterbox_bar())
                .push(
                    widget::container(preview)
                        .width(Length::Fill)
                        .height(Length::FillPortion(ui::LETTERBOXED_PREVIEW_PORTION)),
                )
                .push(letterbox_bar())
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        }
    }
}

fn letterbox_bar<'a>() -> Element<'a, Message> {
    widget::container(widget::Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::FillPortion(ui::LETTERBOX_PORTION))
        .style(rounded_fill(cosmic::iced::Color::BLACK, 0.0))
        .into()
}

/// Two horizontal and two vertical lines splitting the preview in thirds
fn build_grid_overlay<'a>() -> Element<'a, Message> {
    let line = |width: Length, height: Length| -> Element<'a, Message> {
        widget::container(widget::Space::new(width, height))
            .style(rounded_fill(colors::GRID_LINE, 0.0))
            .into()
    };
    let third = || widget::Space::new(Length::FillPortion(1), Length::FillPortion(1));

    let horizontal = widget::column()
        .push(third())
        .push(line(Length::Fill, Length::Fixed(ui::GRID_LINE_WIDTH)))
        .push(third())
        .push(line(Length::Fill, Length::Fixed(ui::GRID_LINE_WIDTH)))
        .push(third())
        .width(Length::Fill)
        .height(Length::Fill);

    let vertical = widget::row()
        .push(third())
        .push(line(Length::Fixed(ui::GRID_LINE_WIDTH), Length::Fill))
        .push(third())
        .push(line(Length::Fixed(ui::GRID_LINE_WIDTH), Length::Fill))
        .push(third())
        .width(Length::Fill)
        .height(Length::Fill);

    cosmic::iced::widget::stack![horizontal, vertical]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
