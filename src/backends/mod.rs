// SPDX-License-Identifier: MPL-2.0

//! Backend abstraction layer
//!
//! The screens only talk to the camera through the capability provider in
//! [`camera`]:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  App Layer                   │
//! └────────────────────┬────────────────────────┘
//!                      │
//! ┌────────────────────┴────────────────────────┐
//! │              Camera Provider                 │
//! │  ┌─────────────────┐  ┌──────────────────┐  │
//! │  │  Permission     │  │ Preview          │  │
//! │  │  (XDG portal)   │  │ (GStreamer)      │  │
//! │  └─────────────────┘  └──────────────────┘  │
//! └─────────────────────────────────────────────┘
//! ```

pub mod camera;
