// SPDX-License-Identifier: GPL-3.0-only

//! Record timer shown on the Video screen
//!
//! The counter is local to the Video screen. It only advances while the shared
//! recording flag is set and drops back to zero as soon as the flag clears or
//! the screen unmounts. The one-second cadence comes from an iced
//! subscription; this type only counts.

use crate::tabs::{Tab, TabTransition};

/// Elapsed-seconds counter driven by a one-second tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordTimer {
    elapsed_secs: u64,
    running: bool,
}

impl RecordTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the shared recording flag.
    ///
    /// Starting keeps the current count, stopping resets it to zero.
    pub fn sync(&mut self, is_recording: bool) {
        if is_recording {
            self.running = true;
        } else {
            self.reset();
        }
    }

    /// Advance by one second. Ignored while stopped, so a tick already queued
    /// when recording stops cannot leak into the next recording.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_secs += 1;
        }
    }

    /// Stop and zero (recording stopped or screen unmounted)
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_secs = 0;
    }

    /// Follow a tab switch.
    ///
    /// Leaving the Video screen drops the count. Entering it picks the running
    /// state up from the shared recording flag, counting from zero.
    pub fn on_transition(&mut self, transition: TabTransition, is_recording: bool) {
        if transition.from == Tab::Video {
            self.reset();
        }
        if transition.to == Tab::Video {
            self.sync(is_recording);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// `MM:SS` rendering of the elapsed time
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }
}

/// Format seconds as zero-padded `MM:SS`.
///
/// There is no hour field: minutes keep growing past 59 (`3600` → `60:00`).
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(9), "00:09");
        assert_eq!(format_elapsed(75), "01:15");
        assert_eq!(format_elapsed(3599), "59:59");
        assert_eq!(format_elapsed(3600), "60:00");
        assert_eq!(format_elapsed(6000), "100:00");
    }

    #[test]
    fn test_transition_between_other_tabs_keeps_count() {
        let mut timer = RecordTimer::new();
        timer.sync(true);
        timer.tick();
        timer.on_transition(
            TabTransition {
                from: Tab::Photo,
                to: Tab::Portrait,
            },
            true,
        );
        assert_eq!(timer.elapsed_secs(), 1);
        assert!(timer.is_running());
    }

    #[test]
    fn test_tick_ignored_when_stopped() {
        let mut timer = RecordTimer::new();
        timer.tick();
        assert_eq!(timer.elapsed_secs(), 0);
        assert!(!timer.is_running());
    }
}
