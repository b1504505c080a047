// SPDX-License-Identifier: GPL-3.0-only

//! Bottom tab bar
//!
//! Five icon and label buttons on a background taken from [`TabBarChrome`].

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::tabs::{Tab, TabBarChrome};
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Length};
use cosmic::widget;

impl AppModel {
    /// Build the tab bar for the given chrome
    pub fn build_tab_bar(&self, chrome: TabBarChrome) -> Element<'_, Message> {
        let active = self.tabs.active();
        let mut row = widget::row().width(Length::Fill).align_y(Alignment::Center);

        for tab in Tab::ALL {
            row = row.push(build_tab_button(tab, chrome.tint(tab == active)));
        }

        widget::container(row)
            .width(Length::Fill)
            .height(Length::Fixed(ui::TAB_BAR_HEIGHT))
            .center_y(ui::TAB_BAR_HEIGHT)
            .style(move |_theme| widget::container::Style {
                background: Some(Background::Color(chrome.background)),
                ..Default::default()
            })
            .into()
    }
}

fn build_tab_button<'a>(tab: Tab, tint: cosmic::iced::Color) -> Element<'a, Message> {
    // Symbolic icons follow the container's text color
    let icon = widget::container(widget::icon::from_name(tab.icon_name()).size(ui::TAB_ICON_SIZE))
        .style(move |_theme| widget::container::Style {
            text_color: Some(tint),
            ..Default::default()
        });

    let label = widget::text(tab.label())
        .size(ui::TAB_LABEL_TEXT_SIZE)
        .font(cosmic::font::bold())
        .class(cosmic::theme::Text::Color(tint));

    let content = widget::column()
        .push(icon)
        .push(widget::vertical_space().height(4))
        .push(label)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    widget::button::custom(content)
        .padding([6, 0])
        .width(Length::Fill)
        .class(cosmic::theme::Button::Text)
        .on_press(Message::SelectTab(tab))
        .into()
}
