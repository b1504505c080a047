// SPDX-License-Identifier: GPL-3.0-only

//! Video source enumeration and sensor selection

use super::types::{BackendError, BackendResult, CameraDevice, CameraFacing, DeviceLocation};
use gstreamer::prelude::*;
use tracing::{debug, info, warn};

/// Device properties tried, in order, as a stable identifier
const ID_PROPERTIES: [&str; 4] = ["object.serial", "node.name", "api.v4l2.path", "device.path"];

/// Device property carrying the sensor location
const LOCATION_PROPERTY: &str = "api.libcamera.location";

/// List video sources known to GStreamer's device monitor.
///
/// Blocking: the monitor probes every provider (PipeWire, V4L2) once.
pub fn enumerate_devices() -> BackendResult<Vec<(CameraDevice, gstreamer::Device)>> {
    gstreamer::init().map_err(|e| BackendError::InitializationFailed(e.to_string()))?;

    let monitor = gstreamer::DeviceMonitor::new();
    if monitor.add_filter(Some("Video/Source"), None).is_none() {
        warn!("Device monitor rejected the Video/Source filter");
    }
    monitor.start()?;
    let found = monitor.devices();
    monitor.stop();

    let devices: Vec<_> = found
        .into_iter()
        .enumerate()
        .map(|(index, device)| (describe_device(index, &device), device))
        .collect();

    info!(count = devices.len(), "Enumerated video sources");
    for (device, _) in &devices {
        debug!(device = %device, location = ?device.location, "Video source");
    }

    Ok(devices)
}

/// Look a device up again by the id handed out by [`enumerate_devices`]
pub fn find_device(id: &str) -> BackendResult<gstreamer::Device> {
    enumerate_devices()?
        .into_iter()
        .find(|(device, _)| device.id == id)
        .map(|(_, device)| device)
        .ok_or_else(|| BackendError::DeviceNotFound(id.to_string()))
}

fn describe_device(index: usize, device: &gstreamer::Device) -> CameraDevice {
    let name = device.display_name().to_string();
    let properties = device.properties();

    let property = |key: &str| {
        properties
            .as_ref()
            .and_then(|props| props.get::<String>(key).ok())
    };

    let id = ID_PROPERTIES
        .into_iter()
        .find_map(|key| property(key))
        .unwrap_or_else(|| format!("{name}#{index}"));

    let location = property(LOCATION_PROPERTY)
        .map(|value| DeviceLocation::parse(&value))
        .unwrap_or_default();

    CameraDevice { name, id, location }
}

/// Pick the device for the requested sensor.
///
/// Devices reporting a matching location win. Without location information
/// the back sensor is the first device and the front sensor the second,
/// wrapping to the first when only one camera exists.
pub fn select_device(devices: &[CameraDevice], facing: CameraFacing) -> Option<&CameraDevice> {
    if let Some(device) = devices.iter().find(|d| d.location.matches(facing)) {
        return Some(device);
    }

    let index = match facing {
        CameraFacing::Back => 0,
        CameraFacing::Front => 1,
    };
    devices.get(index).or_else(|| devices.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str, location: DeviceLocation) -> CameraDevice {
        CameraDevice {
            name: format!("Camera {id}"),
            id: id.to_string(),
            location,
        }
    }

    #[test]
    fn test_select_device_prefers_reported_location() {
        let devices = vec![
            device("a", DeviceLocation::Front),
            device("b", DeviceLocation::Back),
        ];
        assert_eq!(
            select_device(&devices, CameraFacing::Back).map(|d| d.id.as_str()),
            Some("b")
        );
        assert_eq!(
            select_device(&devices, CameraFacing::Front).map(|d| d.id.as_str()),
            Some("a")
        );
    }

    #[test]
    fn test_select_device_falls_back_to_order() {
        let devices = vec![
            device("usb0", DeviceLocation::External),
            device("usb1", DeviceLocation::Unknown),
        ];
        assert_eq!(
            select_device(&devices, CameraFacing::Back).map(|d| d.id.as_str()),
            Some("usb0")
        );
        assert_eq!(
            select_device(&devices, CameraFacing::Front).map(|d| d.id.as_str()),
            Some("usb1")
        );
    }

    #[test]
    fn test_select_device_single_camera_serves_both_facings() {
        let devices = vec![device("only", DeviceLocation::Unknown)];
        assert_eq!(
            select_device(&devices, CameraFacing::Front).map(|d| d.id.as_str()),
            Some("only")
        );
        assert!(select_device(&[], CameraFacing::Back).is_none());
    }
}
