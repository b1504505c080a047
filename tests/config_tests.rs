// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use camera_tabs::backends::camera::CameraFacing;
use camera_tabs::{AppTheme, Config};

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(config.show_grid, "Grid lines should be shown by default");
    assert_eq!(config.app_theme, AppTheme::System);
    assert_eq!(config.facing, CameraFacing::Back);
}

#[test]
fn test_app_theme_dropdown_index_round_trip() {
    for theme in AppTheme::ALL {
        assert_eq!(AppTheme::from_index(theme.index()), Some(theme));
    }
    assert_eq!(AppTheme::from_index(AppTheme::ALL.len()), None);
}

#[test]
fn test_facing_toggle() {
    assert_eq!(CameraFacing::Back.toggle(), CameraFacing::Front);
    assert_eq!(CameraFacing::Front.toggle(), CameraFacing::Back);
}
