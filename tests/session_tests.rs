// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the shared mode store

use camera_tabs::{AppError, CaptureMode, ModeScope, ModeStore, ModeStoreError, RecordingSession};

#[test]
fn test_initial_session_is_video_not_recording() {
    let scope = ModeScope::established();
    let store = scope.store().expect("established scope has a store");

    assert_eq!(store.mode(), CaptureMode::Video);
    assert!(!store.is_recording());
    assert_eq!(
        store.session(),
        RecordingSession {
            mode: CaptureMode::Video,
            is_recording: false,
        }
    );
}

#[test]
fn test_getters_reflect_last_write() {
    let mut store = ModeStore::new();

    let writes = [
        (CaptureMode::Audio, true),
        (CaptureMode::Audio, false),
        (CaptureMode::Video, true),
        (CaptureMode::Video, true),
        (CaptureMode::Audio, false),
    ];

    for (mode, recording) in writes {
        store.set_mode(mode);
        store.set_recording(recording);
        assert_eq!(store.mode(), mode);
        assert_eq!(store.is_recording(), recording);
    }
}

#[test]
fn test_mode_and_recording_are_independent() {
    let mut store = ModeStore::new();
    store.set_recording(true);
    store.set_mode(CaptureMode::Audio);
    assert!(store.is_recording());

    store.set_recording(false);
    assert_eq!(store.mode(), CaptureMode::Audio);
}

#[test]
fn test_access_outside_scope_fails() {
    let mut scope = ModeScope::unestablished();

    assert!(!scope.is_established());
    assert_eq!(scope.store().err(), Some(ModeStoreError::OutsideScope));
    assert_eq!(scope.store_mut().err(), Some(ModeStoreError::OutsideScope));
}

#[test]
fn test_access_inside_scope_never_fails() {
    let mut scope = ModeScope::unestablished();
    scope.establish();

    for _ in 0..3 {
        assert!(scope.store().is_ok());
        let store = scope.store_mut().expect("scope was established");
        store.toggle_recording();
    }
    assert!(scope.store().is_ok_and(|store| store.is_recording()));
}

#[test]
fn test_scope_error_converts_to_app_error() {
    let err: AppError = ModeStoreError::OutsideScope.into();
    assert!(matches!(err, AppError::ModeStore(ModeStoreError::OutsideScope)));
    assert!(err.to_string().contains("outside"));
}
