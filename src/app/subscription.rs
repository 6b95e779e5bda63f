// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources are active only while they have work: the flash tick while
//! banners are scheduled for dismissal, and keyboard navigation while the
//! message box is on screen.

use super::{Action, Message};
use crate::config::FLASH_TICK_INTERVAL_MS;
use crate::ui::context::UiContext;
use crate::ui::message_box;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

pub(super) fn create(ui: &UiContext<Action>) -> Subscription<Message> {
    let tick = if ui.flash.has_pending() {
        time::every(Duration::from_millis(FLASH_TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    };

    let keys = if ui.is_message_box_visible() {
        dialog_keys()
    } else {
        Subscription::none()
    };

    Subscription::batch([tick, keys])
}

/// Tab / Shift+Tab cycle dialog focus, Enter presses the focused button.
fn dialog_keys() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return None;
        };
        let message = match key {
            keyboard::Key::Named(key::Named::Tab) if modifiers.shift() => {
                message_box::Message::FocusPrevious
            }
            keyboard::Key::Named(key::Named::Tab) => message_box::Message::FocusNext,
            keyboard::Key::Named(key::Named::Enter) => message_box::Message::ActivateFocused,
            _ => return None,
        };
        Some(Message::MessageBox(message))
    })
}
