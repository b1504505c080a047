// SPDX-License-Identifier: GPL-3.0-only

//! Shared recording-mode state
//!
//! Every screen reads and writes the same [`RecordingSession`] through a
//! [`ModeStore`]. The store is not a global: the application model owns a
//! [`ModeScope`] and establishes it once during startup. Any access through a
//! scope that was never established is reported as
//! [`ModeStoreError::OutsideScope`].
//!
//! Writes are last-write-wins. The UI runs on a single thread and only one
//! screen is mounted at a time, so there is no conflict resolution.

use std::fmt;

/// Capture mode shared by all screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureMode {
    /// Audio capture (letterboxed preview, opaque tab bar)
    Audio,
    /// Video capture (full-bleed preview, transparent tab bar)
    #[default]
    Video,
}

impl CaptureMode {
    /// Both modes, in mode-switch order
    pub const ALL: [CaptureMode; 2] = [CaptureMode::Audio, CaptureMode::Video];

    /// Upper-case label used by the mode switch
    pub fn label(&self) -> &'static str {
        match self {
            CaptureMode::Audio => "AUDIO",
            CaptureMode::Video => "VIDEO",
        }
    }
}

impl fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transient capture session, alive for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordingSession {
    pub mode: CaptureMode,
    pub is_recording: bool,
}

/// Read/write access to the shared [`RecordingSession`]
#[derive(Debug, Default)]
pub struct ModeStore {
    session: RecordingSession,
}

impl ModeStore {
    /// Store holding the startup session (`Video`, not recording)
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the whole session
    pub fn session(&self) -> RecordingSession {
        self.session
    }

    pub fn mode(&self) -> CaptureMode {
        self.session.mode
    }

    pub fn set_mode(&mut self, mode: CaptureMode) {
        if self.session.mode != mode {
            tracing::debug!(from = %self.session.mode, to = %mode, "Capture mode changed");
        }
        self.session.mode = mode;
    }

    pub fn is_recording(&self) -> bool {
        self.session.is_recording
    }

    pub fn set_recording(&mut self, recording: bool) {
        if self.session.is_recording != recording {
            tracing::debug!(recording, "Recording flag changed");
        }
        self.session.is_recording = recording;
    }

    /// Flip the recording flag (record button press), returning the new value
    pub fn toggle_recording(&mut self) -> bool {
        let recording = !self.session.is_recording;
        self.set_recording(recording);
        recording
    }
}

/// Misuse of the shared store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeStoreError {
    /// The store was accessed before its scope was established
    OutsideScope,
}

impl fmt::Display for ModeStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeStoreError::OutsideScope => {
                write!(f, "mode store accessed outside of an established mode scope")
            }
        }
    }
}

impl std::error::Error for ModeStoreError {}

/// Owning scope for the [`ModeStore`]
///
/// A scope starts out unestablished and holds a store once
/// [`ModeScope::establish`] has run. Accessors never fall back to a default
/// store.
#[derive(Debug, Default)]
pub struct ModeScope {
    store: Option<ModeStore>,
}

impl ModeScope {
    /// Scope whose store does not exist yet
    pub const fn unestablished() -> Self {
        Self { store: None }
    }

    /// Scope with a freshly constructed store
    pub fn established() -> Self {
        Self {
            store: Some(ModeStore::new()),
        }
    }

    /// Construct the store if it does not exist yet.
    ///
    /// An existing store is kept as-is.
    pub fn establish(&mut self) -> &mut ModeStore {
        self.store.get_or_insert_with(|| {
            tracing::info!("Mode scope established");
            ModeStore::new()
        })
    }

    pub fn is_established(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Result<&ModeStore, ModeStoreError> {
        self.store.as_ref().ok_or(ModeStoreError::OutsideScope)
    }

    pub fn store_mut(&mut self) -> Result<&mut ModeStore, ModeStoreError> {
        self.store.as_mut().ok_or(ModeStoreError::OutsideScope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_establish_keeps_existing_store() {
        let mut scope = ModeScope::unestablished();
        scope.establish().set_mode(CaptureMode::Audio);
        scope.establish();
        assert_eq!(scope.store().map(ModeStore::mode), Ok(CaptureMode::Audio));
    }

    #[test]
    fn test_toggle_recording_returns_new_value() {
        let mut store = ModeStore::new();
        assert!(store.toggle_recording());
        assert!(store.is_recording());
        assert!(!store.toggle_recording());
        assert!(!store.is_recording());
    }
}
