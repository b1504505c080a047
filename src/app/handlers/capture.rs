// SPDX-License-Identifier: GPL-3.0-only

//! Capture handlers
//!
//! Handles the AUDIO / VIDEO switch, the record button and the record timer.
//! Recording is a flag in the shared store only; no media is written.

use crate::app::state::{AppModel, Message};
use crate::session::CaptureMode;
use cosmic::Task;
use tracing::{debug, info};

impl AppModel {
    pub(crate) fn handle_set_capture_mode(
        &mut self,
        mode: CaptureMode,
    ) -> Task<cosmic::Action<Message>> {
        info!(%mode, "Capture mode selected");
        self.with_store(|store| store.set_mode(mode));
        Task::none()
    }

    pub(crate) fn handle_toggle_recording(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(is_recording) = self.with_store(|store| store.toggle_recording()) else {
            return Task::none();
        };

        info!(is_recording, "Record button pressed");
        self.record_timer.sync(is_recording);
        Task::none()
    }

    pub(crate) fn handle_record_tick(&mut self) -> Task<cosmic::Action<Message>> {
        // Late ticks after a stop or an unmount are ignored by the timer
        if self.video_screen_mounted() {
            self.record_timer.tick();
        }
        Task::none()
    }

    pub(crate) fn handle_close_requested(&mut self) -> Task<cosmic::Action<Message>> {
        debug!("Close button pressed");
        Task::none()
    }
}
