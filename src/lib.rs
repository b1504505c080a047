// SPDX-License-Identifier: MPL-2.0

//! Camera Tabs - A tabbed camera shell for the COSMIC desktop environment
//!
//! The app switches between five capture modes from a bottom tab bar and
//! shows a live preview with on-screen recording controls for the Video mode.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Application model, screens and tab bar
//! - [`session`]: Shared capture mode and recording flag
//! - [`tabs`]: Tab container, entry actions and tab bar chrome
//! - [`timer`]: Record timer shown on the Video screen
//! - [`backends`]: Camera permission, device enumeration and live preview
//! - [`config`]: User configuration handling

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod i18n;
pub mod session;
pub mod tabs;
pub mod timer;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use config::{AppTheme, Config};
pub use errors::AppError;
pub use session::{CaptureMode, ModeScope, ModeStore, ModeStoreError, RecordingSession};
pub use tabs::{Tab, TabBarChrome, TabContainer, TabTransition};
pub use timer::{RecordTimer, format_elapsed};
