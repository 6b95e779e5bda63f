// SPDX-License-Identifier: MPL-2.0
//! Message handling for the register screen.

use super::register::{format_money, LineId, Register};
use super::{Action, App, Message};
use crate::error::{Error, Result};
use crate::ui::message_box::{self, Event, Kind};
use iced::Task;
use std::time::Instant;

const HELP_TEXT: &str = "<ul><li><strong>Add item</strong> rings up the next product.</li>\
<li><strong>Remove</strong> asks before taking a line off the sale.</li>\
<li><strong>Tab</strong> and <strong>Shift+Tab</strong> move between dialog buttons, \
<strong>Enter</strong> presses the focused one.</li>\
<li>Click outside a dialog to dismiss it.</li></ul>";

pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::PageReady => {
            let scheduled = app.ui.flash.page_ready(Instant::now());
            log::debug!("Page ready, {scheduled} banner(s) scheduled for dismissal");
            Task::none()
        }
        Message::Tick(now) => {
            app.now = now;
            let removed = app.ui.flash.tick(now);
            if removed > 0 {
                log::trace!("Removed {removed} expired banner(s)");
            }
            Task::none()
        }
        Message::MessageBox(message) => handle_message_box(app, message),
        Message::AddItem => {
            let line = app.register.add_next();
            let status = format!("Added {} ({})", line.name, format_money(line.price_cents));
            app.ui.update_status(status);
            Task::none()
        }
        Message::RemoveLineRequested(id) => {
            let Some(line) = app.register.line(id) else {
                log::debug!("Remove requested for missing line {id}");
                return Task::none();
            };
            let body = format!("Remove <strong>{}</strong> from the sale?", line.name);
            app.ui
                .show_confirm(
                    body,
                    Some("Remove item"),
                    Some(Action::RemoveLine(id)),
                    Some(Action::KeepLine(id)),
                )
                .map(Message::MessageBox)
        }
        Message::CompleteSale => {
            if app.register.is_empty() {
                return app
                    .ui
                    .show_warning(
                        "Add at least one item before completing the sale.",
                        Some("Empty sale"),
                    )
                    .map(Message::MessageBox);
            }
            let total = format_money(app.register.total_cents());
            let count = app.register.clear();
            log::info!("Sale completed: {count} line(s), {total}");
            app.ui.update_status(format!("Sale completed: {total}"));
            app.ui
                .show_success(
                    format!("{count} item(s) sold.<br>Total charged: <strong>{total}</strong>"),
                    Some("Sale completed"),
                )
                .map(Message::MessageBox)
        }
        Message::VoidSaleRequested => {
            if app.register.is_empty() {
                return app
                    .ui
                    .show_info("There is nothing to void.", None)
                    .map(Message::MessageBox);
            }
            app.ui
                .show_confirm(
                    "Void the whole sale? All lines will be removed.",
                    Some("Void sale"),
                    Some(Action::VoidSale),
                    Some(Action::KeepSale),
                )
                .map(Message::MessageBox)
        }
        Message::ShowHelp => app
            .ui
            .show_info(HELP_TEXT, Some("Register help"))
            .map(Message::MessageBox),
        Message::Flash(kind, text) => {
            let id = app.ui.flash.render(kind, text);
            app.ui.flash.schedule(id, Instant::now());
            Task::none()
        }
        Message::UpdateStatus(text) => {
            app.ui.update_status(text);
            Task::none()
        }
    }
}

fn handle_message_box(app: &mut App, message: message_box::Message) -> Task<Message> {
    let Some(overlay) = app.ui.overlay_mut() else {
        return Task::none();
    };
    match overlay.update(message) {
        Event::Activated(index) => {
            let register = &mut app.register;
            overlay
                .activate(index, |action| perform(register, action))
                .unwrap_or_else(Task::none)
        }
        Event::Closed => {
            log::debug!("Message box dismissed from the backdrop");
            Task::none()
        }
        Event::None => Task::none(),
    }
}

/// Carries out a dialog button's action. Follow-up feedback is sent as
/// messages so it lands after the box has closed.
fn perform(register: &mut Register, action: Action) -> Result<Task<Message>> {
    match action {
        Action::RemoveLine(id) => {
            let line = register.remove(id)?;
            Ok(Task::batch([
                Task::done(Message::UpdateStatus(format!("Removed {}", line.name))),
                Task::done(Message::Flash(
                    Kind::Success,
                    format!("{} removed from the sale", line.name),
                )),
            ]))
        }
        Action::KeepLine(id) => Ok(Task::done(Message::UpdateStatus(keep_line_status(
            register, id,
        )?))),
        Action::VoidSale => {
            let count = register.clear();
            log::info!("Sale voided ({count} line(s))");
            Ok(Task::done(Message::Flash(
                Kind::Warning,
                "Sale voided".to_string(),
            )))
        }
        Action::KeepSale => Ok(Task::none()),
    }
}

fn keep_line_status(register: &Register, id: LineId) -> Result<String> {
    register
        .line(id)
        .map(|line| format!("Kept {}", line.name))
        .ok_or_else(|| Error::Action(format!("line {id} is no longer on the sale")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn app() -> App {
        App::with_config(&Config::default())
    }

    fn press(app: &mut App, index: usize) {
        let _ = handle(
            app,
            Message::MessageBox(message_box::Message::ButtonPressed(index)),
        );
    }

    #[test]
    fn remove_asks_for_confirmation_first() {
        let mut app = app();
        let id = app.register.add_next().id;
        let _ = handle(&mut app, Message::RemoveLineRequested(id));

        assert!(app.ui.is_message_box_visible());
        assert_eq!(app.register.lines().len(), 1);

        let buttons = app.ui.overlay().and_then(|o| o.dialog()).map(|d| d.buttons().len());
        assert_eq!(buttons, Some(2));
    }

    #[test]
    fn confirm_removes_line_and_closes() {
        let mut app = app();
        let id = app.register.add_next().id;
        let _ = handle(&mut app, Message::RemoveLineRequested(id));
        press(&mut app, 1);

        assert!(app.register.is_empty());
        assert!(!app.ui.is_message_box_visible());
    }

    #[test]
    fn cancel_keeps_line_and_closes() {
        let mut app = app();
        let id = app.register.add_next().id;
        let _ = handle(&mut app, Message::RemoveLineRequested(id));
        press(&mut app, 0);

        assert_eq!(app.register.lines().len(), 1);
        assert!(!app.ui.is_message_box_visible());
    }

    #[test]
    fn failing_action_still_closes_box() {
        let mut app = app();
        let id = app.register.add_next().id;
        let _ = handle(&mut app, Message::RemoveLineRequested(id));
        // The line disappears before the user confirms.
        app.register.clear();
        press(&mut app, 1);

        assert!(!app.ui.is_message_box_visible());
    }

    #[test]
    fn complete_empty_sale_warns() {
        let mut app = app();
        let _ = handle(&mut app, Message::CompleteSale);

        let kind = app.ui.overlay().and_then(|o| o.dialog()).map(|d| d.kind());
        assert_eq!(kind, Some(Kind::Warning));
    }

    #[test]
    fn complete_sale_clears_register_and_updates_status() {
        let mut app = app();
        app.register.push("Jim Beam 1L", 1999);
        let _ = handle(&mut app, Message::CompleteSale);

        assert!(app.register.is_empty());
        assert_eq!(
            app.ui.status().map(|s| s.text()),
            Some("Sale completed: $19.99")
        );
        let kind = app.ui.overlay().and_then(|o| o.dialog()).map(|d| d.kind());
        assert_eq!(kind, Some(Kind::Success));
    }

    #[test]
    fn backdrop_press_closes_without_running_actions() {
        let mut app = app();
        app.register.add_next();
        let _ = handle(&mut app, Message::VoidSaleRequested);
        let _ = handle(
            &mut app,
            Message::MessageBox(message_box::Message::BackdropPressed),
        );

        assert!(!app.ui.is_message_box_visible());
        assert_eq!(app.register.lines().len(), 1);
    }

    #[test]
    fn enter_activates_focused_button() {
        let mut app = app();
        app.register.add_next();
        let _ = handle(&mut app, Message::VoidSaleRequested);
        let generation = app.ui.overlay().map(|o| o.generation()).unwrap_or_default();
        for message in [
            message_box::Message::FocusFirst(generation),
            message_box::Message::FocusNext,
            message_box::Message::ActivateFocused,
        ] {
            let _ = handle(&mut app, Message::MessageBox(message));
        }

        assert!(app.register.is_empty());
        assert!(!app.ui.is_message_box_visible());
    }

    #[test]
    fn late_flash_is_scheduled_explicitly() {
        let mut app = app();
        let _ = handle(&mut app, Message::PageReady);
        let _ = handle(&mut app, Message::Flash(Kind::Info, "Drawer opened".into()));

        assert_eq!(app.ui.flash.len(), 1);
        assert!(app.ui.flash.has_pending());
    }

    #[test]
    fn message_box_messages_before_first_show_are_ignored() {
        let mut app = app();
        let _ = handle(
            &mut app,
            Message::MessageBox(message_box::Message::ActivateFocused),
        );
        assert!(app.ui.overlay().is_none());
    }
}
