// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! The mounted screen fills the window; the tab bar is layered on top of it
//! along the bottom edge, so over the live preview a transparent bar lets the
//! picture show through.

use crate::app::screens::build_placeholder_screen;
use crate::app::state::{AppModel, Message};
use crate::errors::AppError;
use crate::fl;
use crate::session::ModeStoreError;
use crate::tabs::{Tab, TabBarChrome};
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Border, Color, Length};
use cosmic::widget;

/// Filled rounded rectangle style for overlay controls
pub fn rounded_fill(
    color: Color,
    radius: f32,
) -> impl Fn(&cosmic::Theme) -> widget::container::Style {
    move |_theme| widget::container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Plain black area filling the available space
pub fn black_fill<'a>() -> Element<'a, Message> {
    widget::container(widget::Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(rounded_fill(Color::BLACK, 0.0))
        .into()
}

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let session = match self.scope.store() {
            Ok(store) => store.session(),
            Err(err) => return self.build_store_error_view(err),
        };

        let screen = match self.tabs.active() {
            Tab::Video => self.build_video_screen(session),
            Tab::TimeLapse => {
                build_placeholder_screen(fl!("time-lapse-title"), fl!("time-lapse-subtitle"))
            }
            Tab::SloMo => build_placeholder_screen(fl!("slo-mo-title"), fl!("slo-mo-subtitle")),
            Tab::Photo => build_placeholder_screen(fl!("photo-title"), fl!("photo-subtitle")),
            Tab::Portrait => {
                build_placeholder_screen(fl!("portrait-title"), fl!("portrait-subtitle"))
            }
        };

        let tab_bar = self.build_tab_bar(TabBarChrome::for_mode(session.mode));

        let bottom_layer = widget::column()
            .push(widget::Space::new(Length::Fill, Length::Fill))
            .push(tab_bar)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = cosmic::iced::widget::stack![screen, bottom_layer]
            .width(Length::Fill)
            .height(Length::Fill);

        if let Some(error) = &self.error {
            layers = layers.push(
                widget::column()
                    .push(self.build_error_banner(error))
                    .push(widget::Space::new(Length::Fill, Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }

        widget::container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(rounded_fill(Color::BLACK, 0.0))
            .into()
    }

    /// Full-window panel shown when the shared store cannot be reached
    fn build_store_error_view(&self, err: ModeStoreError) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let content = widget::column()
            .push(
                widget::text(fl!("store-error-title"))
                    .size(20)
                    .font(cosmic::font::bold())
                    .class(cosmic::theme::Text::Color(Color::WHITE)),
            )
            .push(widget::vertical_space().height(spacing.space_xs))
            .push(
                widget::text(err.to_string())
                    .size(14)
                    .class(cosmic::theme::Text::Color(Color::WHITE)),
            )
            .align_x(Alignment::Center);

        widget::container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .style(rounded_fill(crate::constants::colors::RECORD_RED, 0.0))
            .into()
    }

    fn build_error_banner<'a>(&self, error: &AppError) -> Element<'a, Message> {
        let spacing = cosmic::theme::spacing();

        let row = widget::row()
            .push(widget::icon::from_name("dialog-error-symbolic").size(20))
            .push(widget::horizontal_space().width(spacing.space_xs))
            .push(
                widget::text(error.to_string())
                    .size(14)
                    .class(cosmic::theme::Text::Color(Color::WHITE))
                    .width(Length::Fill),
            )
            .push(
                widget::button::text(fl!("dismiss"))
                    .on_press(Message::DismissError)
                    .class(cosmic::theme::Button::Text),
            )
            .align_y(Alignment::Center);

        widget::container(row)
            .width(Length::Fill)
            .padding([spacing.space_xs, spacing.space_s])
            .style(rounded_fill(crate::constants::colors::RECORD_RED, 0.0))
            .into()
    }
}
