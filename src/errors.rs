// SPDX-License-Identifier: MPL-2.0

//! Error types for the camera application

use crate::backends::camera::BackendError;
use crate::session::ModeStoreError;
use std::fmt;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Camera provider errors (permission portal, device enumeration, preview)
    Camera(BackendError),
    /// Shared mode store used outside its scope
    ModeStore(ModeStoreError),
    /// Configuration errors
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Camera(e) => write!(f, "Camera error: {}", e),
            AppError::ModeStore(e) => write!(f, "Mode store error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Camera(e) => Some(e),
            AppError::ModeStore(e) => Some(e),
            AppError::Config(_) => None,
        }
    }
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        AppError::Camera(err)
    }
}

impl From<ModeStoreError> for AppError {
    fn from(err: ModeStoreError) -> Self {
        AppError::ModeStore(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_mode_store_error_is_source() {
        let err = AppError::from(ModeStoreError::OutsideScope);
        assert!(err.to_string().starts_with("Mode store error:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_has_no_source() {
        let err = AppError::Config("missing handler".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing handler");
        assert!(err.source().is_none());
    }
}
