// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the tab container and tab bar chrome

use camera_tabs::{CaptureMode, ModeScope, ModeStore, Tab, TabBarChrome, TabContainer};

#[test]
fn test_tab_order_and_default() {
    assert_eq!(
        Tab::ALL,
        [Tab::TimeLapse, Tab::SloMo, Tab::Video, Tab::Photo, Tab::Portrait]
    );
    assert_eq!(TabContainer::new().active(), Tab::Video);
}

#[test]
fn test_entering_time_lapse_forces_audio() {
    for start in CaptureMode::ALL {
        let mut store = ModeStore::new();
        store.set_mode(start);
        let mut tabs = TabContainer::new();

        tabs.select(Tab::TimeLapse, &mut store);
        assert_eq!(store.mode(), CaptureMode::Audio);
    }
}

#[test]
fn test_time_lapse_entry_is_idempotent() {
    let mut store = ModeStore::new();
    let mut tabs = TabContainer::new();

    for _ in 0..3 {
        tabs.select(Tab::TimeLapse, &mut store);
        assert_eq!(store.mode(), CaptureMode::Audio);
        tabs.select(Tab::Photo, &mut store);
        assert_eq!(store.mode(), CaptureMode::Audio);
        store.set_mode(CaptureMode::Video);
    }
}

#[test]
fn test_other_tabs_leave_mode_untouched() {
    for tab in [Tab::SloMo, Tab::Photo, Tab::Portrait] {
        let mut store = ModeStore::new();
        let mut tabs = TabContainer::new();

        tabs.select(tab, &mut store);
        assert_eq!(store.mode(), CaptureMode::Video, "{tab:?}");
    }
}

#[test]
fn test_time_lapse_entry_keeps_recording_flag() {
    let mut store = ModeStore::new();
    store.set_recording(true);
    let mut tabs = TabContainer::new();

    tabs.select(Tab::TimeLapse, &mut store);
    assert!(store.is_recording());
}

#[test]
fn test_selecting_active_tab_is_noop() {
    let mut store = ModeStore::new();
    let mut tabs = TabContainer::new();

    assert!(tabs.select(Tab::Video, &mut store).is_none());

    let transition = tabs.select(Tab::Photo, &mut store).expect("tab changed");
    assert_eq!(transition.from, Tab::Video);
    assert_eq!(transition.to, Tab::Photo);
    assert_eq!(tabs.active(), Tab::Photo);
}

#[test]
fn test_tab_bar_transparent_iff_video() {
    assert!(TabBarChrome::for_mode(CaptureMode::Video).is_transparent());

    let audio = TabBarChrome::for_mode(CaptureMode::Audio);
    assert!(!audio.is_transparent());
    assert!((audio.background.a - 0.9).abs() < f32::EPSILON);
}

#[test]
fn test_tab_bar_tints() {
    let chrome = TabBarChrome::for_mode(CaptureMode::Video);
    assert_eq!(chrome.tint(true), chrome.active_tint);
    assert_eq!(chrome.tint(false), chrome.inactive_tint);
    assert!((chrome.inactive_tint.a - 0.6).abs() < f32::EPSILON);
}

#[test]
fn test_time_lapse_round_trip_keeps_audio() {
    let mut scope = ModeScope::unestablished();
    let mut tabs = TabContainer::new();
    tabs.mount(scope.establish());

    let mode = |scope: &ModeScope| scope.store().map(ModeStore::mode).expect("established");
    let chrome = |scope: &ModeScope| TabBarChrome::for_mode(mode(scope));

    assert_eq!(tabs.active(), Tab::Video);
    assert_eq!(mode(&scope), CaptureMode::Video);
    assert!(chrome(&scope).is_transparent());

    let store = scope.store_mut().expect("established");
    tabs.select(Tab::TimeLapse, store);
    assert_eq!(mode(&scope), CaptureMode::Audio);
    assert!(!chrome(&scope).is_transparent());

    // Nothing is restored when leaving Time-Lapse
    let store = scope.store_mut().expect("established");
    tabs.select(Tab::Video, store);
    assert_eq!(tabs.active(), Tab::Video);
    assert_eq!(mode(&scope), CaptureMode::Audio);
    assert!(!chrome(&scope).is_transparent());

    // Switching back to Video by hand makes the bar transparent again
    scope
        .store_mut()
        .expect("established")
        .set_mode(CaptureMode::Video);
    assert!(chrome(&scope).is_transparent());
}
