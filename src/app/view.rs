// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen and stacks the toast overlay on top of it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::detail;
use crate::ui::library;
use crate::ui::notifications::{self, Toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub library: &'a library::State,
    pub detail: &'a detail::State,
    pub images: &'a ImageCache,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Library => ctx
            .library
            .view(library::ViewContext {
                i18n: ctx.i18n,
                cache: ctx.images,
            })
            .map(Message::Library),
        Screen::Detail => ctx
            .detail
            .view(detail::ViewContext {
                i18n: ctx.i18n,
                cache: ctx.images,
            })
            .map(Message::Detail),
    };

    let content = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(content);
    if ctx.notifications.has_notifications() {
        layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}
