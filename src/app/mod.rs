// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the library and detail
//! screens.
//!
//! The `App` struct wires together the backend client, localization, the
//! shared image cache and the notification manager, and translates messages
//! into side effects like backend fetches, save dialogs and downloads.

pub mod config;
pub mod fetch;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::BackendClient;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::detail;
use crate::ui::gallery_view;
use crate::ui::library;
use crate::ui::notifications;
use fetch::FetchTracker;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Resolved once at startup; `System` is not re-detected per frame.
    theme: Theme,
    client: BackendClient,
    model_fetch: FetchTracker,
    library: library::State,
    detail: detail::State,
    /// Decoded images shared by both screens.
    images: ImageCache,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("model", &self.detail.slug())
            .field("generation", &self.model_fetch.current())
            .field("images", &self.images)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and starts the first backend requests:
    /// the health probe, then either the requested model or the library.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            slug,
            config,
            config_warning,
            client,
        } = flags;

        let i18n = I18n::new(lang, &config);
        tracing::info!(
            backend = client.urls().as_str(),
            locale = %i18n.current_locale(),
            "starting"
        );

        let mut app = App {
            i18n,
            screen: Screen::default(),
            theme: config.general.theme_mode.theme(),
            client,
            model_fetch: FetchTracker::new(),
            library: library::State::new(),
            detail: detail::State::new(gallery_view::Settings::from_config(&config.gallery)),
            images: ImageCache::new(config.gallery.image_cache_entries()),
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let health = update::check_health(&app.client);
        let first = {
            let mut ctx = app.update_context();
            match slug {
                Some(slug) => update::open_model(&mut ctx, slug),
                None => update::load_library(&mut ctx),
            }
        };

        (app, Task::batch([health, first]))
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            client: &self.client,
            model_fetch: &mut self.model_fetch,
            library: &mut self.library,
            detail: &mut self.detail,
            images: &mut self.images,
            notifications: &mut self.notifications,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match (self.screen, self.detail.record()) {
            (Screen::Detail, Some(record)) => format!("{} - {app_name}", record.title),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_gallery_subscription(self.screen, &self.detail),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::WindowResized(width) => {
                self.detail.set_window_width(width);
                Task::none()
            }
            Message::Library(library_message) => {
                update::handle_library_message(&mut self.update_context(), &library_message)
            }
            Message::Detail(detail_message) => {
                update::handle_detail_message(&mut self.update_context(), detail_message)
            }
            Message::ModelLoaded { generation, result } => {
                update::handle_model_loaded(&mut self.update_context(), generation, result)
            }
            Message::ModelListLoaded(result) => {
                update::handle_model_list_loaded(&mut self.update_context(), result)
            }
            Message::LibraryRefreshed(result) => {
                update::handle_library_refreshed(&mut self.update_context(), result)
            }
            Message::ImageFetched {
                url,
                generation,
                result,
            } => update::handle_image_fetched(&mut self.update_context(), url, generation, result),
            Message::HealthChecked(result) => {
                update::handle_health_checked(&mut self.update_context(), result)
            }
            Message::DownloadDestinationChosen { target, path } => {
                update::handle_download_destination(&mut self.update_context(), target, path)
            }
            Message::DownloadFinished { file, result } => {
                update::handle_download_finished(&mut self.update_context(), file, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            library: &self.library,
            detail: &self.detail,
            images: &self.images,
            notifications: &self.notifications,
        })
    }
}
