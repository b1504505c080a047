// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::backends::camera::{BackendError, CameraDevice, CameraPermission, select_device};
use crate::config::Config;
use crate::errors::AppError;
use crate::session::{CaptureMode, ModeScope, ModeStore, ModeStoreError};
use crate::tabs::{Tab, TabContainer};
use crate::timer::RecordTimer;
use cosmic::cosmic_config;
use cosmic::widget::{about::About, image};
use tracing::error;

/// Main application state
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// Owner of the shared mode store
    pub scope: ModeScope,
    /// Which screen is mounted
    pub tabs: TabContainer,
    /// Elapsed recording time shown on the Video screen
    pub record_timer: RecordTimer,
    /// Camera access state
    pub permission: CameraPermission,
    /// Video sources found after access was granted
    pub available_cameras: Vec<CameraDevice>,
    /// Latest preview frame
    pub current_frame: Option<image::Handle>,
    /// Labels for the theme dropdown in the settings drawer
    pub theme_dropdown_options: Vec<String>,
    /// Last error surfaced to the user, cleared on dismiss
    pub error: Option<AppError>,
}

impl AppModel {
    /// Run `f` against the shared store.
    ///
    /// Access outside an established scope is logged and shown in the error
    /// panel; `None` is returned and nothing is written.
    pub(crate) fn with_store<R>(&mut self, f: impl FnOnce(&mut ModeStore) -> R) -> Option<R> {
        let result = self.scope.store_mut().map(f);
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.report_store_error(err);
                None
            }
        }
    }

    /// Log a store misuse and surface it in the error panel
    pub(crate) fn report_store_error(&mut self, err: ModeStoreError) {
        error!(error = %err, "Shared mode store unavailable");
        self.error = Some(err.into());
    }

    /// Whether the Video screen is the mounted one
    pub fn video_screen_mounted(&self) -> bool {
        self.tabs.active() == Tab::Video
    }

    /// Device matching the configured sensor
    pub fn selected_camera(&self) -> Option<&CameraDevice> {
        select_device(&self.available_cameras, self.config.facing)
    }
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// Messages emitted by the application and its widgets.
///
/// Messages are organized into logical groups:
/// - **UI Navigation**: Context pages, tab selection
/// - **Recording**: Capture mode, record button, timer ticks
/// - **Camera**: Permission, devices, sensor flip, preview frames
/// - **System**: Settings and errors
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page (About, Settings)
    ToggleContextPage(ContextPage),
    /// Tab bar button pressed
    SelectTab(Tab),

    // ===== Recording =====
    /// AUDIO / VIDEO switch pressed
    SetCaptureMode(CaptureMode),
    /// Record button pressed
    ToggleRecording,
    /// One second passed while the record timer runs
    RecordTick,
    /// Close button pressed (no action attached)
    CloseRequested,

    // ===== Camera =====
    /// Permission query or request finished
    PermissionResolved(CameraPermission),
    /// "Grant Permission" pressed
    RequestPermission,
    /// Device enumeration finished
    CamerasEnumerated(Result<Vec<CameraDevice>, BackendError>),
    /// Flip button pressed
    FlipCamera,
    /// New preview frame from the pipeline
    PreviewFrame(image::Handle),
    /// Preview pipeline could not start or failed while running
    PreviewFailed(BackendError),

    // ===== System =====
    /// Configuration changed on disk
    UpdateConfig(Config),
    /// Theme selected in the settings drawer
    SetAppTheme(usize),
    /// Grid overlay toggled in the settings drawer
    SetShowGrid(bool),
    /// Error panel dismissed
    DismissError,
}
