// SPDX-License-Identifier: GPL-3.0-only

//! UI Navigation handlers
//!
//! Handles context pages and tab selection.

use crate::app::state::{AppModel, ContextPage, Message};
use crate::tabs::Tab;
use cosmic::Task;
use tracing::{error, info};

impl AppModel {
    // =========================================================================
    // UI Navigation Handlers
    // =========================================================================

    pub(crate) fn handle_launch_url(&self, url: String) -> Task<cosmic::Action<Message>> {
        match open::that_detached(&url) {
            Ok(()) => {}
            Err(err) => {
                error!(url = %url, error = %err, "Failed to open URL");
            }
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_context_page(
        &mut self,
        context_page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == context_page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = context_page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    // =========================================================================
    // Tab Handlers
    // =========================================================================

    /// Switch the mounted screen.
    ///
    /// Unmounting the Video screen drops its local timer. Mounting it again
    /// picks the running state up from the shared recording flag, counting
    /// from zero.
    pub(crate) fn handle_select_tab(&mut self, tab: Tab) -> Task<cosmic::Action<Message>> {
        let tabs = &mut self.tabs;
        let transition = match self.scope.store_mut().map(|store| tabs.select(tab, store)) {
            Ok(Some(transition)) => transition,
            Ok(None) => return Task::none(),
            Err(err) => {
                self.report_store_error(err);
                return Task::none();
            }
        };

        info!(from = ?transition.from, to = ?transition.to, "Switched tab");

        let is_recording = self.with_store(|store| store.is_recording()).unwrap_or(false);
        self.record_timer.on_transition(transition, is_recording);

        Task::none()
    }
}
