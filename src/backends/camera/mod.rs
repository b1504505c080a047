// SPDX-License-Identifier: MPL-2.0

//! Camera capability provider
//!
//! The screens never touch camera hardware. They ask a [`CameraProvider`] for
//! three things only: the permission state, the list of sensors, and a live
//! preview stream for one of them.
//!
//! ```text
//! ┌─────────────────────┐
//! │   UI Layer (App)    │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │ CameraProvider Trait│  ← permission, devices, preview
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │SystemCameraProvider │  ← XDG portal + GStreamer
//! └─────────────────────┘
//! ```

pub mod devices;
pub mod pipeline;
pub mod portal;
pub mod types;

pub use devices::select_device;
pub use pipeline::PreviewPipeline;
pub use types::*;

use crate::constants::app_info;
use std::future::Future;
use tracing::{info, warn};

/// Everything the screens need from the camera stack
pub trait CameraProvider: Send + Sync {
    /// Current permission state. May prompt the user the first time.
    fn permission(&self) -> impl Future<Output = CameraPermission> + Send;

    /// Ask again after a denial (the prompt's retry action)
    fn request_permission(&self) -> impl Future<Output = CameraPermission> + Send;

    /// Available video sources. Blocking.
    fn devices(&self) -> BackendResult<Vec<CameraDevice>>;

    /// Start streaming RGBA preview frames of the device with `device_id`.
    ///
    /// The stream stops when the returned pipeline is dropped.
    fn preview(&self, device_id: &str, sender: FrameSender) -> BackendResult<PreviewPipeline>;
}

/// Provider backed by the desktop portal and GStreamer
#[derive(Debug, Clone, Copy)]
pub struct SystemCameraProvider {
    /// Whether camera access has to go through the portal
    sandboxed: bool,
}

impl SystemCameraProvider {
    /// Provider for the current runtime environment
    pub fn new() -> Self {
        Self {
            sandboxed: app_info::is_flatpak(),
        }
    }

    async fn ask_portal(&self) -> CameraPermission {
        if !self.sandboxed {
            info!("Not sandboxed, camera devices are accessed directly");
            return CameraPermission::Granted;
        }

        match portal::is_camera_present().await {
            Ok(false) => warn!("Portal reports no camera present"),
            Ok(true) => {}
            Err(err) => warn!(error = %err, "Could not query camera presence"),
        }

        match portal::access_camera().await {
            Ok(permission) => permission,
            Err(err) => {
                warn!(error = %err, "Camera portal request failed, treating as denied");
                CameraPermission::Denied
            }
        }
    }
}

impl Default for SystemCameraProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraProvider for SystemCameraProvider {
    fn permission(&self) -> impl Future<Output = CameraPermission> + Send {
        self.ask_portal()
    }

    fn request_permission(&self) -> impl Future<Output = CameraPermission> + Send {
        info!("Camera permission requested again");
        self.ask_portal()
    }

    fn devices(&self) -> BackendResult<Vec<CameraDevice>> {
        let devices: Vec<CameraDevice> = devices::enumerate_devices()?
            .into_iter()
            .map(|(device, _)| device)
            .collect();
        if devices.is_empty() {
            return Err(BackendError::NoCameraFound);
        }
        Ok(devices)
    }

    fn preview(&self, device_id: &str, sender: FrameSender) -> BackendResult<PreviewPipeline> {
        let device = devices::find_device(device_id)?;
        PreviewPipeline::new(&device, sender)
    }
}
