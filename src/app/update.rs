// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! This module handles all application messages by routing them to focused handler methods.
//! The main `update()` function acts as a dispatcher, while specific handlers are implemented
//! in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::ui`: Context pages and tab selection
//! - `handlers::capture`: Capture mode, record button, record timer
//! - `handlers::camera`: Permission, device enumeration, sensor flip, preview frames
//! - `handlers::system`: Settings, configuration updates, error panel

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),
            Message::SelectTab(tab) => self.handle_select_tab(tab),

            // ===== Recording =====
            Message::SetCaptureMode(mode) => self.handle_set_capture_mode(mode),
            Message::ToggleRecording => self.handle_toggle_recording(),
            Message::RecordTick => self.handle_record_tick(),
            Message::CloseRequested => self.handle_close_requested(),

            // ===== Camera =====
            Message::PermissionResolved(permission) => self.handle_permission_resolved(permission),
            Message::RequestPermission => self.handle_request_permission(),
            Message::CamerasEnumerated(result) => self.handle_cameras_enumerated(result),
            Message::FlipCamera => self.handle_flip_camera(),
            Message::PreviewFrame(frame) => self.handle_preview_frame(frame),
            Message::PreviewFailed(err) => self.handle_preview_failed(err),

            // ===== System =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::SetShowGrid(show_grid) => self.handle_set_show_grid(show_grid),
            Message::DismissError => self.handle_dismiss_error(),
        }
    }
}
