// SPDX-License-Identifier: GPL-3.0-only

//! System handlers
//!
//! Handles configuration updates, settings and the error panel.

use crate::app::state::{AppModel, Message};
use crate::config::AppTheme;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info};

impl AppModel {
    pub(crate) fn handle_update_config(
        &mut self,
        config: crate::config::Config,
    ) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        let theme_changed = config.app_theme != self.config.app_theme;
        self.config = config;

        if theme_changed {
            return cosmic::command::set_theme(self.config.app_theme.theme());
        }
        Task::none()
    }

    pub(crate) fn handle_set_app_theme(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(app_theme) = AppTheme::from_index(index) else {
            return Task::none();
        };

        info!(?app_theme, "Setting application theme");
        self.config.app_theme = app_theme;
        self.save_config("app theme");

        cosmic::command::set_theme(app_theme.theme())
    }

    pub(crate) fn handle_set_show_grid(&mut self, show_grid: bool) -> Task<cosmic::Action<Message>> {
        info!(show_grid, "Grid overlay toggled");
        self.config.show_grid = show_grid;
        self.save_config("grid overlay");
        Task::none()
    }

    pub(crate) fn handle_dismiss_error(&mut self) -> Task<cosmic::Action<Message>> {
        self.error = None;
        Task::none()
    }

    pub(crate) fn save_config(&self, setting: &str) {
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, setting, "Failed to save setting");
        }
    }
}
