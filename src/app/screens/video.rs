// SPDX-License-Identifier: GPL-3.0-only

//! Video screen
//!
//! Layers, bottom to top: the (possibly letterboxed) preview with grid lines,
//! then the controls overlay. The bottom of the overlay keeps clear of the
//! tab bar.

use crate::app::state::{AppModel, Message};
use crate::app::view::black_fill;
use crate::backends::camera::CameraPermission;
use crate::constants::ui;
use crate::session::RecordingSession;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Build the Video screen for the current session state
    pub fn build_video_screen(&self, session: RecordingSession) -> Element<'_, Message> {
        match self.permission {
            // Still waiting for an answer
            CameraPermission::Undetermined => return black_fill(),
            CameraPermission::Denied => return self.build_permission_prompt(),
            CameraPermission::Granted => {}
        }

        let spacing = cosmic::theme::spacing();

        let controls = widget::column()
            .push(self.build_top_controls())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(self.build_mode_switcher(session.mode))
            .push(widget::Space::new(Length::Fill, Length::Fill))
            .push(self.build_zoom_chips())
            .push(widget::vertical_space().height(spacing.space_m))
            .push(self.build_bottom_bar(session.is_recording))
            .push(widget::vertical_space().height(ui::TAB_BAR_HEIGHT + f32::from(spacing.space_m)))
            .width(Length::Fill)
            .height(Length::Fill);

        cosmic::iced::widget::stack![self.build_camera_preview(session.mode), controls]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
