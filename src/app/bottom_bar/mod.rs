// SPDX-License-Identifier: GPL-3.0-only

//! Bottom bar module
//!
//! This module handles the bottom control row of the Video screen:
//! - Gallery thumbnail (placeholder)
//! - Record button
//! - Camera switcher (flip sensors)

pub mod camera_switcher;
pub mod gallery_button;

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::alignment::Horizontal;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    /// Build the bottom control row
    ///
    /// Fixed-width side slots around the record button keep it centered
    /// regardless of what the sides contain.
    pub fn build_bottom_bar(&self, is_recording: bool) -> Element<'_, Message> {
        let left_section = widget::container(self.build_gallery_button())
            .width(Length::Fixed(ui::SIDE_CONTROL_WIDTH))
            .align_x(Horizontal::Left);

        let right_section = widget::container(self.build_camera_switcher())
            .width(Length::Fixed(ui::SIDE_CONTROL_WIDTH))
            .align_x(Horizontal::Right);

        widget::row()
            .push(left_section)
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(self.build_record_button(is_recording))
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(right_section)
            .padding([0, 40])
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .into()
    }
}
