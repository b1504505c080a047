// SPDX-License-Identifier: GPL-3.0-only

//! Camera handlers
//!
//! Handles permission negotiation, device enumeration, sensor flips and
//! preview frames.

use crate::app::state::{AppModel, Message};
use crate::backends::camera::{
    BackendError, CameraDevice, CameraPermission, CameraProvider, SystemCameraProvider,
};
use cosmic::Task;
use cosmic::widget::image;
use tracing::{error, info, warn};

/// Query the permission state without forcing a new prompt
pub(crate) fn query_permission() -> Task<cosmic::Action<Message>> {
    Task::perform(
        async {
            let provider = SystemCameraProvider::new();
            provider.permission().await
        },
        |permission| cosmic::Action::App(Message::PermissionResolved(permission)),
    )
}

/// Enumerate video sources on a blocking thread
pub(crate) fn enumerate_cameras() -> Task<cosmic::Action<Message>> {
    Task::perform(
        async {
            tokio::task::spawn_blocking(|| SystemCameraProvider::new().devices())
                .await
                .map_err(|e| BackendError::InitializationFailed(e.to_string()))
                .and_then(|result| result)
        },
        |result| cosmic::Action::App(Message::CamerasEnumerated(result)),
    )
}

impl AppModel {
    pub(crate) fn handle_permission_resolved(
        &mut self,
        permission: CameraPermission,
    ) -> Task<cosmic::Action<Message>> {
        info!(?permission, "Camera permission resolved");
        self.permission = permission;

        if permission.is_granted() && self.available_cameras.is_empty() {
            return enumerate_cameras();
        }
        Task::none()
    }

    pub(crate) fn handle_request_permission(&mut self) -> Task<cosmic::Action<Message>> {
        info!("Grant Permission pressed");
        Task::perform(
            async {
                let provider = SystemCameraProvider::new();
                provider.request_permission().await
            },
            |permission| cosmic::Action::App(Message::PermissionResolved(permission)),
        )
    }

    pub(crate) fn handle_cameras_enumerated(
        &mut self,
        result: Result<Vec<CameraDevice>, BackendError>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(cameras) => {
                info!(count = cameras.len(), "Cameras available");
                self.available_cameras = cameras;
                if let Some(camera) = self.selected_camera() {
                    info!(camera = %camera, facing = %self.config.facing, "Selected camera");
                }
            }
            Err(BackendError::NoCameraFound) => {
                // Preview area stays black
                warn!("No camera found");
                self.available_cameras.clear();
            }
            Err(err) => {
                error!(error = %err, "Failed to enumerate cameras");
                self.available_cameras.clear();
                self.error = Some(err.into());
            }
        }
        Task::none()
    }

    pub(crate) fn handle_flip_camera(&mut self) -> Task<cosmic::Action<Message>> {
        let facing = self.config.facing.toggle();
        info!(from = %self.config.facing, to = %facing, "Flipping camera");
        self.config.facing = facing;
        self.current_frame = None;

        self.save_config("camera facing");
        Task::none()
    }

    pub(crate) fn handle_preview_frame(
        &mut self,
        frame: image::Handle,
    ) -> Task<cosmic::Action<Message>> {
        if self.video_screen_mounted() {
            self.current_frame = Some(frame);
        }
        Task::none()
    }

    pub(crate) fn handle_preview_failed(
        &mut self,
        err: BackendError,
    ) -> Task<cosmic::Action<Message>> {
        error!(error = %err, "Camera preview failed");
        self.current_frame = None;
        Task::none()
    }
}
