// SPDX-License-Identifier: MPL-2.0
//! Page-level UI context shared by everything that shows feedback.
//!
//! The application shell owns one `UiContext` and hands it to the code that
//! needs to show dialogs, update the status line or add banners. The message
//! box overlay inside it is created on first use and kept for the lifetime of
//! the context.

use crate::config::{Config, DEFAULT_FOCUS_DELAY_MS, MAX_FOCUS_DELAY_MS};
use crate::ui::flash::{Board, FlashTiming};
use crate::ui::message_box::{self, Options, Overlay};
use crate::ui::status::StatusLine;
use iced::Task;
use std::time::Duration;

/// Flash board, message box and status line of one page.
#[derive(Debug)]
pub struct UiContext<A> {
    pub flash: Board,
    overlay: Option<Overlay<A>>,
    status: Option<StatusLine>,
    focus_delay: Duration,
}

impl<A: Clone> UiContext<A> {
    /// Creates a context from the loaded configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let focus_delay_ms = config
            .message_box
            .focus_delay_ms
            .unwrap_or(DEFAULT_FOCUS_DELAY_MS)
            .min(MAX_FOCUS_DELAY_MS);
        let status = config
            .status
            .enabled
            .unwrap_or(true)
            .then(StatusLine::default);

        Self {
            flash: Board::new(FlashTiming::from_config(&config.flash)),
            overlay: None,
            status,
            focus_delay: Duration::from_millis(focus_delay_ms),
        }
    }

    /// Returns the message box, creating it on first call.
    pub fn ensure_overlay(&mut self) -> &mut Overlay<A> {
        let focus_delay = self.focus_delay;
        self.overlay.get_or_insert_with(|| {
            log::debug!("Creating message box overlay");
            Overlay::new(focus_delay)
        })
    }

    /// Shows a dialog built from `options`, replacing any dialog on screen.
    pub fn show_message_box(&mut self, options: Options<A>) -> Task<message_box::Message> {
        self.ensure_overlay().show(options)
    }

    /// Hides the message box. Does nothing if it was never shown.
    pub fn close_message_box(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.close();
        }
    }

    pub fn show_success(
        &mut self,
        message: impl Into<String>,
        title: Option<&str>,
    ) -> Task<message_box::Message> {
        self.show_message_box(Options::success(message, title))
    }

    pub fn show_error(
        &mut self,
        message: impl Into<String>,
        title: Option<&str>,
    ) -> Task<message_box::Message> {
        self.show_message_box(Options::error(message, title))
    }

    pub fn show_warning(
        &mut self,
        message: impl Into<String>,
        title: Option<&str>,
    ) -> Task<message_box::Message> {
        self.show_message_box(Options::warning(message, title))
    }

    pub fn show_info(
        &mut self,
        message: impl Into<String>,
        title: Option<&str>,
    ) -> Task<message_box::Message> {
        self.show_message_box(Options::info(message, title))
    }

    /// Asks for confirmation: Cancel reports `on_cancel`, Confirm reports
    /// `on_confirm`.
    pub fn show_confirm(
        &mut self,
        message: impl Into<String>,
        title: Option<&str>,
        on_confirm: Option<A>,
        on_cancel: Option<A>,
    ) -> Task<message_box::Message> {
        self.show_message_box(Options::confirm(message, title, on_confirm, on_cancel))
    }
}

impl<A> UiContext<A> {
    /// Writes `message` into the status line as plain text.
    ///
    /// Returns `false` and does nothing when the page has no status line.
    pub fn update_status(&mut self, message: impl Into<String>) -> bool {
        match self.status.as_mut() {
            Some(status) => {
                status.set(message);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    /// The message box, if it has been created.
    #[must_use]
    pub fn overlay(&self) -> Option<&Overlay<A>> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut Overlay<A>> {
        self.overlay.as_mut()
    }

    /// Whether a dialog is currently on screen.
    #[must_use]
    pub fn is_message_box_visible(&self) -> bool {
        self.overlay.as_ref().is_some_and(Overlay::is_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatusConfig;
    use crate::ui::message_box::Kind;

    fn context() -> UiContext<u32> {
        UiContext::new(&Config::default())
    }

    #[test]
    fn overlay_is_created_lazily_once() {
        let mut ui = context();
        assert!(ui.overlay().is_none());

        let _ = ui.ensure_overlay().show(Options::info("hi", None));
        let generation = ui.ensure_overlay().generation();
        assert_eq!(generation, 1, "second ensure returns the same overlay");
        assert!(ui.is_message_box_visible());
    }

    #[test]
    fn close_before_first_show_is_noop() {
        let mut ui = context();
        ui.close_message_box();
        assert!(ui.overlay().is_none());
    }

    #[test]
    fn show_success_defaults() {
        let mut ui = context();
        let _ = ui.show_success("Saved", None);

        let dialog = ui.overlay().and_then(Overlay::dialog).expect("visible");
        assert_eq!(dialog.kind(), Kind::Success);
        assert_eq!(dialog.icon(), Kind::Success.icon());
        assert_eq!(dialog.title(), "Success");
        assert_eq!(dialog.buttons().len(), 1);
        assert_eq!(dialog.buttons()[0].label, "OK");
    }

    #[test]
    fn show_close_cycle_repeats() {
        let mut ui = context();
        for i in 0..5 {
            let _ = ui.show_warning(format!("warning {i}"), None);
            ui.close_message_box();
            assert!(!ui.is_message_box_visible());
        }
    }

    #[test]
    fn update_status_writes_plain_text() {
        let mut ui = context();
        assert!(ui.update_status("Ready"));
        assert_eq!(ui.status().map(StatusLine::text), Some("Ready"));
    }

    #[test]
    fn update_status_without_status_line_does_nothing() {
        let config = Config {
            status: StatusConfig {
                enabled: Some(false),
            },
            ..Config::default()
        };
        let mut ui: UiContext<u32> = UiContext::new(&config);
        assert!(!ui.update_status("Ready"));
        assert!(ui.status().is_none());
    }
}
