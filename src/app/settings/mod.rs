// SPDX-License-Identifier: GPL-3.0-only

//! Settings UI module
//!
//! This module handles the settings drawer UI.

pub mod view;
