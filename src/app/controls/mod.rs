// SPDX-License-Identifier: MPL-2.0

//! Recording controls module
//!
//! This module handles the overlay controls of the Video screen:
//! - Record button
//! - Close button, timer pill and quality label
//! - AUDIO / VIDEO mode switch
//! - Zoom chips

pub mod mode_switcher;
pub mod record_button;
pub mod recording_ui;
pub mod zoom_chips;
