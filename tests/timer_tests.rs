// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the record timer

use camera_tabs::{ModeScope, ModeStore, RecordTimer, Tab, TabContainer, format_elapsed};

#[test]
fn test_counts_while_recording() {
    let mut store = ModeStore::new();
    let mut timer = RecordTimer::new();

    timer.sync(store.toggle_recording());
    for _ in 0..75 {
        timer.tick();
    }

    assert!(timer.is_running());
    assert_eq!(timer.elapsed_secs(), 75);
    assert_eq!(timer.display(), "01:15");
}

#[test]
fn test_stop_resets_to_zero() {
    let mut timer = RecordTimer::new();
    timer.sync(true);
    timer.tick();
    timer.tick();

    timer.sync(false);
    assert_eq!(timer.display(), "00:00");
    assert!(!timer.is_running());

    // A late tick after the stop is ignored
    timer.tick();
    assert_eq!(timer.elapsed_secs(), 0);
}

#[test]
fn test_restart_counts_from_zero() {
    let mut timer = RecordTimer::new();
    timer.sync(true);
    for _ in 0..10 {
        timer.tick();
    }
    timer.sync(false);
    timer.sync(true);
    timer.tick();
    assert_eq!(timer.display(), "00:01");
}

#[test]
fn test_unmount_resets_even_while_recording() {
    let mut timer = RecordTimer::new();
    timer.sync(true);
    timer.tick();

    timer.reset();
    assert_eq!(timer.elapsed_secs(), 0);

    // Remounting with the flag still set starts over
    timer.sync(true);
    assert!(timer.is_running());
    assert_eq!(timer.display(), "00:00");
}

#[test]
fn test_minutes_are_unbounded() {
    assert_eq!(format_elapsed(3600), "60:00");
    assert_eq!(format_elapsed(6000), "100:00");
}

#[test]
fn test_leaving_video_resets_and_returning_resumes_from_zero() {
    let mut scope = ModeScope::established();
    let mut tabs = TabContainer::new();
    let mut timer = RecordTimer::new();
    tabs.mount(scope.establish());

    let store = scope.store_mut().expect("established");
    timer.sync(store.toggle_recording());
    for _ in 0..3 {
        timer.tick();
    }
    assert_eq!(timer.display(), "00:03");

    let store = scope.store_mut().expect("established");
    let transition = tabs.select(Tab::TimeLapse, store).expect("tab changed");
    timer.on_transition(transition, store.is_recording());
    assert_eq!(timer.display(), "00:00");
    assert!(!timer.is_running());

    // Ticks queued before the switch do not count
    timer.tick();
    assert_eq!(timer.elapsed_secs(), 0);

    let store = scope.store_mut().expect("established");
    let transition = tabs.select(Tab::Video, store).expect("tab changed");
    timer.on_transition(transition, store.is_recording());
    assert!(store.is_recording());
    assert!(timer.is_running());
    assert_eq!(timer.display(), "00:00");

    timer.tick();
    assert_eq!(timer.display(), "00:01");
}

#[test]
fn test_returning_to_video_after_stop_stays_idle() {
    let mut store = ModeStore::new();
    let mut tabs = TabContainer::new();
    let mut timer = RecordTimer::new();
    tabs.mount(&mut store);

    timer.sync(store.toggle_recording());
    timer.tick();

    let transition = tabs.select(Tab::Photo, &mut store).expect("tab changed");
    timer.on_transition(transition, store.is_recording());
    store.toggle_recording();

    let transition = tabs.select(Tab::Video, &mut store).expect("tab changed");
    timer.on_transition(transition, store.is_recording());
    assert!(!timer.is_running());
    assert_eq!(timer.display(), "00:00");
}
