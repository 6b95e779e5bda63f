// SPDX-License-Identifier: MPL-2.0
//! Application root state: the register screen and its page-level UI context.
//!
//! The `App` struct owns the [`UiContext`] (flash banners, message box,
//! status line) and the open sale, and translates messages into changes of
//! either.

mod message;
pub mod paths;
pub mod register;
mod subscription;
mod update;
mod view;

pub use message::{parse_flash_spec, Action, Flags, Message};

use crate::config;
use crate::ui::context::UiContext;
use crate::ui::message_box::Kind;
use iced::{window, Element, Subscription, Task, Theme};
use register::Register;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    ui: UiContext<Action>,
    register: Register,
    /// Time of the last tick, used to render banner opacity.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("lines", &self.register.lines().len())
            .field("banners", &self.ui.flash.len())
            .field("message_box_visible", &self.ui.is_message_box_visible())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once and a
    // second boot falls back to defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
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
    /// Loads configuration, renders the banners given on the command line and
    /// announces page-ready.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let mut app = Self::with_config(&config);

        for spec in &flags.flashes {
            let (kind, text) = parse_flash_spec(spec);
            app.ui.flash.render(kind, text);
        }
        if let Some(warning) = config_warning {
            app.ui.flash.render(Kind::Warning, warning);
        }

        let status = flags.status.unwrap_or_else(|| "Ready".to_string());
        app.ui.update_status(status);

        (app, Task::done(Message::PageReady))
    }

    /// Builds an empty register screen for `config`.
    #[must_use]
    pub fn with_config(config: &config::Config) -> Self {
        Self {
            ui: UiContext::new(config),
            register: Register::new(),
            now: Instant::now(),
        }
    }

    pub fn title(&self) -> String {
        if self.register.is_empty() {
            "LastKings POS".to_string()
        } else {
            format!(
                "LastKings POS - {}",
                register::format_money(self.register.total_cents())
            )
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create(&self.ui)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    #[must_use]
    pub fn ui(&self) -> &UiContext<Action> {
        &self.ui
    }

    #[must_use]
    pub fn register(&self) -> &Register {
        &self.register
    }
}
