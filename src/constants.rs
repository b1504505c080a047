// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// UI Constants
pub mod ui {
    /// Tab bar height (overlays the bottom of every screen)
    pub const TAB_BAR_HEIGHT: f32 = 72.0;

    /// Tab icon size
    pub const TAB_ICON_SIZE: u16 = 22;

    /// Tab label text size
    pub const TAB_LABEL_TEXT_SIZE: u16 = 10;

    /// Record button size (outer ring)
    pub const RECORD_BUTTON_OUTER: f32 = 80.0;

    /// Record button ring width
    pub const RECORD_BUTTON_BORDER: f32 = 4.0;

    /// Record button inner circle size while idle
    pub const RECORD_INNER_IDLE: f32 = 50.0;

    /// Record button inner square size while recording
    pub const RECORD_INNER_RECORDING: f32 = 30.0;

    /// Corner radius of the inner square while recording
    pub const RECORD_INNER_RECORDING_RADIUS: f32 = 4.0;

    /// Camera flip button size
    pub const FLIP_BUTTON_SIZE: f32 = 50.0;

    /// Camera flip icon size
    pub const FLIP_ICON_SIZE: u16 = 32;

    /// Close button size
    pub const CLOSE_BUTTON_SIZE: f32 = 40.0;

    /// Gallery thumbnail placeholder size
    pub const THUMBNAIL_SIZE: f32 = 50.0;

    /// Gallery thumbnail corner radius
    pub const THUMBNAIL_RADIUS: f32 = 8.0;

    /// Width reserved left and right of the record button
    pub const SIDE_CONTROL_WIDTH: f32 = 80.0;

    /// Recording dot diameter
    pub const RECORDING_DOT_SIZE: f32 = 8.0;

    /// Timer and quality label text size
    pub const TOP_LABEL_TEXT_SIZE: u16 = 16;

    /// Mode switch / zoom chip text size
    pub const CHIP_TEXT_SIZE: u16 = 14;

    /// Pill-shaped chip corner radius
    pub const CHIP_RADIUS: f32 = 16.0;

    /// Grid line thickness
    pub const GRID_LINE_WIDTH: f32 = 1.0;

    /// Letterbox bar share of the screen height in Audio mode (top and bottom, each)
    pub const LETTERBOX_PORTION: u16 = 15;

    /// Preview share of the screen height in Audio mode
    pub const LETTERBOXED_PREVIEW_PORTION: u16 = 70;

    /// Static capture quality label
    pub const QUALITY_LABEL: &str = "4K • 60";

    /// Zoom chip labels, the second one is the active chip
    pub const ZOOM_CHIPS: [&str; 2] = ["0,5", "1×"];

    /// Index of the active zoom chip
    pub const ACTIVE_ZOOM_CHIP: usize = 1;
}

/// Color palette of the camera overlay
pub mod colors {
    use cosmic::iced::Color;

    /// Record red (#FF3B30)
    pub const RECORD_RED: Color = Color::from_rgb(1.0, 59.0 / 255.0, 48.0 / 255.0);

    /// Accent gold (#FFD700)
    pub const ACCENT_GOLD: Color = Color::from_rgb(1.0, 215.0 / 255.0, 0.0);

    /// Translucent gold behind the active mode / zoom chip
    pub const ACCENT_GOLD_SOFT: Color = Color::from_rgba(1.0, 215.0 / 255.0, 0.0, 0.2);

    /// Translucent gold behind the active zoom chip
    pub const ACCENT_GOLD_ZOOM: Color = Color::from_rgba(1.0, 215.0 / 255.0, 0.0, 0.3);

    /// Dim backdrop behind overlay buttons
    pub const OVERLAY_DIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);

    /// Backdrop behind zoom chips
    pub const ZOOM_DIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);

    /// Inactive chip text
    pub const CHIP_TEXT: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.7);

    /// Rule-of-thirds grid lines
    pub const GRID_LINE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.3);

    /// Record button outer fill while idle
    pub const RECORD_RING_IDLE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.3);

    /// Record button outer fill while recording
    pub const RECORD_RING_RECORDING: Color = Color::from_rgba(1.0, 59.0 / 255.0, 48.0 / 255.0, 0.3);

    /// Thumbnail placeholder fill
    pub const THUMBNAIL_FILL: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.2);

    /// Permission button (#007AFF)
    pub const PERMISSION_BLUE: Color = Color::from_rgb(0.0, 122.0 / 255.0, 1.0);

    /// Placeholder screen background (#1a1a1a)
    pub const PLACEHOLDER_BACKGROUND: Color = Color::from_rgb(26.0 / 255.0, 26.0 / 255.0, 26.0 / 255.0);
}

/// Timing constants
pub mod timing {
    use super::Duration;

    /// Record timer cadence
    pub const RECORD_TICK: Duration = Duration::from_secs(1);

    /// Frame counter modulo for periodic logging
    pub const FRAME_LOG_INTERVAL: u64 = 30;

    /// Pipeline state change timeout on stop
    pub const STOP_TIMEOUT_SECS: u64 = 2;

    /// Delay before rebuilding a preview pipeline that failed to start
    pub const PREVIEW_RETRY: Duration = Duration::from_secs(5);

    /// Longest wait for a preview frame before checking for cancellation
    pub const FRAME_WAIT: Duration = Duration::from_millis(100);
}

/// Preview pipeline settings
pub mod preview {
    /// Preview frames are scaled down to at most this width
    pub const MAX_WIDTH: u32 = 1280;

    /// Preview frames are scaled down to at most this height
    pub const MAX_HEIGHT: u32 = 720;

    /// Frames buffered between the GStreamer thread and the UI
    pub const CHANNEL_CAPACITY: usize = 4;

    /// Appsink queue depth (older frames are dropped)
    pub const MAX_BUFFERS: u32 = 2;
}

/// Application information utilities
pub mod app_info {
    use std::path::Path;

    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Check if the application is running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        Path::new("/.flatpak-info").exists()
    }

    /// Get the runtime environment string (e.g., "Flatpak" or "Native")
    pub fn runtime_environment() -> &'static str {
        if is_flatpak() { "Flatpak" } else { "Native" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterbox_portions_fill_screen() {
        assert_eq!(
            ui::LETTERBOX_PORTION * 2 + ui::LETTERBOXED_PREVIEW_PORTION,
            100
        );
    }

    #[test]
    fn test_active_zoom_chip_in_range() {
        assert!(ui::ACTIVE_ZOOM_CHIP < ui::ZOOM_CHIPS.len());
        assert_eq!(ui::ZOOM_CHIPS[ui::ACTIVE_ZOOM_CHIP], "1×");
    }

    #[test]
    fn test_record_tick_is_one_second() {
        assert_eq!(timing::RECORD_TICK, Duration::from_secs(1));
    }
}
