// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for camera backends

use cosmic::widget::image;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Camera access as reported by the provider
///
/// Denial is a normal UI state, not an error: the Video screen shows a prompt
/// with a single retry action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraPermission {
    /// Not answered yet (render nothing)
    #[default]
    Undetermined,
    /// Access refused (render the request prompt)
    Denied,
    /// Access allowed (render the live preview)
    Granted,
}

impl CameraPermission {
    pub fn is_granted(&self) -> bool {
        matches!(self, CameraPermission::Granted)
    }
}

/// Which physical sensor the preview should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

impl CameraFacing {
    /// The other sensor
    pub fn toggle(&self) -> Self {
        match self {
            CameraFacing::Back => CameraFacing::Front,
            CameraFacing::Front => CameraFacing::Back,
        }
    }
}

impl fmt::Display for CameraFacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraFacing::Back => write!(f, "back"),
            CameraFacing::Front => write!(f, "front"),
        }
    }
}

/// Mounting location reported by the device (libcamera/PipeWire property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceLocation {
    Back,
    Front,
    External,
    #[default]
    Unknown,
}

impl DeviceLocation {
    /// Parse the `api.libcamera.location` property value
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "back" | "rear" => DeviceLocation::Back,
            "front" => DeviceLocation::Front,
            "external" => DeviceLocation::External,
            _ => DeviceLocation::Unknown,
        }
    }

    /// Whether this location is the requested sensor
    pub fn matches(&self, facing: CameraFacing) -> bool {
        matches!(
            (self, facing),
            (DeviceLocation::Back, CameraFacing::Back) | (DeviceLocation::Front, CameraFacing::Front)
        )
    }
}

/// A video source found by the device monitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    /// Human readable name
    pub name: String,
    /// Stable identifier used to find the device again (serial, node or path)
    pub id: String,
    /// Where the sensor is mounted, if the device says so
    pub location: DeviceLocation,
}

impl fmt::Display for CameraDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Tightly packed RGBA preview frame
#[derive(Clone)]
pub struct PreviewFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl fmt::Debug for PreviewFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PreviewFrame({}x{}, {} bytes)",
            self.width,
            self.height,
            self.data.len()
        )
    }
}

impl PreviewFrame {
    /// Convert into an image handle for the preview widget
    pub fn into_handle(self) -> image::Handle {
        image::Handle::from_rgba(self.width, self.height, self.data)
    }
}

/// Camera provider error types
#[derive(Debug, Clone)]
pub enum BackendError {
    /// The desktop portal could not be reached
    PortalUnavailable(String),
    /// The portal answered with an error
    Portal(String),
    /// No camera devices found
    NoCameraFound,
    /// Device with the given id disappeared
    DeviceNotFound(String),
    /// GStreamer could not be initialized
    InitializationFailed(String),
    /// Preview pipeline failed to build or run
    Pipeline(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::PortalUnavailable(msg) => write!(f, "Camera portal unavailable: {}", msg),
            BackendError::Portal(msg) => write!(f, "Camera portal error: {}", msg),
            BackendError::NoCameraFound => write!(f, "No camera devices found"),
            BackendError::DeviceNotFound(id) => write!(f, "Camera device not found: {}", id),
            BackendError::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            BackendError::Pipeline(msg) => write!(f, "Preview pipeline error: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

impl From<zbus::Error> for BackendError {
    fn from(err: zbus::Error) -> Self {
        BackendError::Portal(err.to_string())
    }
}

impl From<gstreamer::glib::BoolError> for BackendError {
    fn from(err: gstreamer::glib::BoolError) -> Self {
        BackendError::Pipeline(err.to_string())
    }
}

impl From<gstreamer::StateChangeError> for BackendError {
    fn from(err: gstreamer::StateChangeError) -> Self {
        BackendError::Pipeline(err.to_string())
    }
}

/// Result type for camera provider operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Channel the preview pipeline pushes frames into
pub type FrameSender = futures::channel::mpsc::Sender<PreviewFrame>;

/// Receiving end of [`FrameSender`]
pub type FrameReceiver = futures::channel::mpsc::Receiver<PreviewFrame>;
