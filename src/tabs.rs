// SPDX-License-Identifier: GPL-3.0-only

//! Tab container
//!
//! Five fixed destinations, exactly one mounted at a time. Switching tabs is a
//! plain one-of-five selection with no history. Entering a tab runs its entry
//! action against the shared [`ModeStore`]; only Time-Lapse has one (it forces
//! [`CaptureMode::Audio`]), and nothing is restored on the way out.
//!
//! The tab bar's chrome is a pure function of the shared mode, see
//! [`TabBarChrome::for_mode`].

use crate::fl;
use crate::session::{CaptureMode, ModeStore};
use cosmic::iced::Color;

/// Navigation destinations, in tab bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    TimeLapse,
    SloMo,
    #[default]
    Video,
    Photo,
    Portrait,
}

impl Tab {
    /// All tabs in the order they appear in the tab bar
    pub const ALL: [Tab; 5] = [
        Tab::TimeLapse,
        Tab::SloMo,
        Tab::Video,
        Tab::Photo,
        Tab::Portrait,
    ];

    /// Localized upper-case tab label
    pub fn label(&self) -> String {
        match self {
            Tab::TimeLapse => fl!("tab-time-lapse"),
            Tab::SloMo => fl!("tab-slo-mo"),
            Tab::Video => fl!("tab-video"),
            Tab::Photo => fl!("tab-photo"),
            Tab::Portrait => fl!("tab-portrait"),
        }
    }

    /// Symbolic icon name handed to the icon theme
    pub fn icon_name(&self) -> &'static str {
        match self {
            Tab::TimeLapse => "preferences-system-time-symbolic",
            Tab::SloMo => "weather-storm-symbolic",
            Tab::Video => "camera-video-symbolic",
            Tab::Photo => "camera-photo-symbolic",
            Tab::Portrait => "avatar-default-symbolic",
        }
    }

    /// Mode this tab writes into the shared store when it is entered
    pub fn forced_mode(&self) -> Option<CaptureMode> {
        match self {
            Tab::TimeLapse => Some(CaptureMode::Audio),
            Tab::SloMo | Tab::Video | Tab::Photo | Tab::Portrait => None,
        }
    }

    /// Entry action, run every time the tab's screen is mounted.
    ///
    /// Overwrites the shared mode unconditionally when the tab forces one.
    pub fn on_enter(&self, store: &mut ModeStore) {
        if let Some(mode) = self.forced_mode() {
            tracing::info!(tab = ?self, mode = %mode, "Tab entry forces capture mode");
            store.set_mode(mode);
        }
    }
}

/// A completed switch between two different tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabTransition {
    pub from: Tab,
    pub to: Tab,
}

/// Selection state of the tab container
#[derive(Debug, Clone, Default)]
pub struct TabContainer {
    active: Tab,
}

impl TabContainer {
    /// Container showing the default tab (Video)
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently mounted tab
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Mount the initial screen at startup
    pub fn mount(&self, store: &mut ModeStore) {
        self.active.on_enter(store);
    }

    /// Switch to `tab`.
    ///
    /// Selecting the already active tab does nothing and returns `None`.
    /// Otherwise the current screen is unmounted, `tab` is mounted and its
    /// entry action runs.
    pub fn select(&mut self, tab: Tab, store: &mut ModeStore) -> Option<TabTransition> {
        if tab == self.active {
            return None;
        }

        let transition = TabTransition {
            from: self.active,
            to: tab,
        };
        self.active = tab;
        tab.on_enter(store);
        Some(transition)
    }
}

/// Tab bar colors derived from the shared mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabBarChrome {
    pub background: Color,
    pub active_tint: Color,
    pub inactive_tint: Color,
}

impl TabBarChrome {
    /// Transparent over the live preview in Video mode, near-opaque dark
    /// otherwise.
    pub fn for_mode(mode: CaptureMode) -> Self {
        let background = match mode {
            CaptureMode::Video => Color::TRANSPARENT,
            CaptureMode::Audio => Color::from_rgba(0.0, 0.0, 0.0, 0.9),
        };

        Self {
            background,
            active_tint: Color::from_rgb8(0xFF, 0xD7, 0x00),
            inactive_tint: Color::from_rgba(1.0, 1.0, 1.0, 0.6),
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.background.a == 0.0
    }

    /// Label/icon color for a tab
    pub fn tint(&self, active: bool) -> Color {
        if active {
            self.active_tint
        } else {
            self.inactive_tint
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_time_lapse_forces_a_mode() {
        let forcing: Vec<Tab> = Tab::ALL
            .into_iter()
            .filter(|tab| tab.forced_mode().is_some())
            .collect();
        assert_eq!(forcing, vec![Tab::TimeLapse]);
    }

    #[test]
    fn test_icon_names_are_symbolic() {
        for tab in Tab::ALL {
            assert!(tab.icon_name().ends_with("-symbolic"), "{tab:?}");
        }
    }
}
