// SPDX-License-Identifier: GPL-3.0-only

//! XDG desktop portal camera access
//!
//! Sandboxed apps ask `org.freedesktop.portal.Camera` for access. The portal
//! answers asynchronously through an `org.freedesktop.portal.Request` object
//! whose path is derived from our unique bus name and a handle token, so the
//! response signal is subscribed to before the call is made.

use super::types::{BackendError, BackendResult, CameraPermission};
use futures::StreamExt;
use std::collections::HashMap;
use tracing::{info, warn};
use zbus::zvariant::{OwnedObjectPath, OwnedValue, Value};

const PORTAL_DESTINATION: &str = "org.freedesktop.portal.Desktop";
const PORTAL_PATH: &str = "/org/freedesktop/portal/desktop";
const CAMERA_INTERFACE: &str = "org.freedesktop.portal.Camera";
const REQUEST_INTERFACE: &str = "org.freedesktop.portal.Request";

/// Map a portal `Response` code to a permission.
///
/// `0` is success; `1` (user cancelled) and `2` (other) both deny.
pub fn permission_from_response(code: u32) -> CameraPermission {
    match code {
        0 => CameraPermission::Granted,
        _ => CameraPermission::Denied,
    }
}

/// Object path the portal will use for the request with `token`
pub fn request_path(unique_name: &str, token: &str) -> String {
    let sender = unique_name.trim_start_matches(':').replace('.', "_");
    format!("{PORTAL_PATH}/request/{sender}/{token}")
}

async fn session_connection() -> BackendResult<zbus::Connection> {
    zbus::Connection::session()
        .await
        .map_err(|e| BackendError::PortalUnavailable(e.to_string()))
}

async fn camera_proxy(connection: &zbus::Connection) -> BackendResult<zbus::Proxy<'static>> {
    zbus::Proxy::new(connection, PORTAL_DESTINATION, PORTAL_PATH, CAMERA_INTERFACE)
        .await
        .map_err(|e| BackendError::PortalUnavailable(e.to_string()))
}

/// Whether the portal sees any camera at all
pub async fn is_camera_present() -> BackendResult<bool> {
    let connection = session_connection().await?;
    let camera = camera_proxy(&connection).await?;
    Ok(camera.get_property::<bool>("IsCameraPresent").await?)
}

/// Ask the portal for camera access and wait for the user's answer.
///
/// The portal remembers a previous grant, so repeated calls only prompt when
/// access has not been decided yet.
pub async fn access_camera() -> BackendResult<CameraPermission> {
    let connection = session_connection().await?;

    let unique_name = connection
        .unique_name()
        .map(|name| name.to_string())
        .ok_or_else(|| BackendError::Portal("connection has no unique name".to_string()))?;
    let token = format!("camera_tabs_{}", uuid::Uuid::new_v4().simple());
    let path = request_path(&unique_name, &token);

    let request = zbus::Proxy::new(
        &connection,
        PORTAL_DESTINATION,
        path.clone(),
        REQUEST_INTERFACE,
    )
    .await?;
    let mut responses = request.receive_signal("Response").await?;

    let camera = camera_proxy(&connection).await?;
    let mut options: HashMap<&str, Value<'_>> = HashMap::new();
    options.insert("handle_token", Value::new(token.as_str()));

    info!(request = %path, "Requesting camera access from portal");
    let handle: OwnedObjectPath = camera.call("AccessCamera", &(options,)).await?;
    if handle.as_str() != path {
        warn!(expected = %path, actual = %handle, "Portal returned unexpected request handle");
    }

    let message = responses
        .next()
        .await
        .ok_or_else(|| BackendError::Portal("request closed without a response".to_string()))?;
    let (code, _results): (u32, HashMap<String, OwnedValue>) = message.body().deserialize()?;

    let permission = permission_from_response(code);
    info!(code, ?permission, "Camera portal responded");
    Ok(permission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path_from_unique_name() {
        assert_eq!(
            request_path(":1.42", "camera_tabs_abc"),
            "/org/freedesktop/portal/desktop/request/1_42/camera_tabs_abc"
        );
    }

    #[test]
    fn test_permission_from_response() {
        assert_eq!(permission_from_response(0), CameraPermission::Granted);
        assert_eq!(permission_from_response(1), CameraPermission::Denied);
        assert_eq!(permission_from_response(2), CameraPermission::Denied);
    }
}
