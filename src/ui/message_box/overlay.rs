// SPDX-License-Identifier: MPL-2.0
//! The modal overlay hosting one dialog at a time.
//!
//! The overlay is either hidden or shows exactly one [`Dialog`]. Showing a new
//! dialog replaces the previous one outright; there is no stacking or queue.

use super::kind::Kind;
use super::options::{Button, Options, DEFAULT_TITLE};
use iced::Task;
use std::fmt;
use std::time::Duration;

/// Messages emitted by the dialog view and the keyboard subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A footer button was pressed.
    ButtonPressed(usize),
    /// The backdrop outside the dialog was pressed.
    BackdropPressed,
    /// Deferred focus of the first button for the dialog shown at `generation`.
    FocusFirst(u64),
    FocusNext,
    FocusPrevious,
    /// Enter pressed while a button has focus.
    ActivateFocused,
}

/// Outcome of [`Overlay::update`] for the owner to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The button at this index must be activated with [`Overlay::activate`].
    Activated(usize),
    /// The box closed without a button.
    Closed,
}

/// A built dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog<A> {
    kind: Kind,
    title: String,
    body: String,
    buttons: Vec<Button<A>>,
}

impl<A> Dialog<A> {
    fn build(options: Options<A>) -> Self {
        Self {
            kind: options.kind,
            title: if options.title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                options.title
            },
            body: options.body,
            buttons: options.buttons,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body markup as given by the caller.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn buttons(&self) -> &[Button<A>] {
        &self.buttons
    }
}

/// Modal message box. Hidden until the first [`show`](Self::show).
pub struct Overlay<A> {
    dialog: Option<Dialog<A>>,
    focused: Option<usize>,
    generation: u64,
    focus_delay: Duration,
}

impl<A> fmt::Debug for Overlay<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("visible", &self.is_visible())
            .field("focused", &self.focused)
            .field("generation", &self.generation)
            .finish()
    }
}

/// Waits out the focus delay, then asks to focus the first button of the
/// dialog shown at `generation`.
async fn focus_after(delay: Duration, generation: u64) -> Message {
    tokio::time::sleep(delay).await;
    Message::FocusFirst(generation)
}

impl<A: Clone> Overlay<A> {
    /// Creates a hidden overlay whose dialogs focus their first button
    /// `focus_delay` after being shown.
    #[must_use]
    pub fn new(focus_delay: Duration) -> Self {
        Self {
            dialog: None,
            focused: None,
            generation: 0,
            focus_delay,
        }
    }

    /// Builds a dialog from `options`, replacing any current one, and makes
    /// the overlay visible.
    ///
    /// The returned task focuses the first button once the delay has
    /// elapsed, after the dialog has been rendered.
    pub fn show(&mut self, options: Options<A>) -> Task<Message> {
        let dialog = Dialog::build(options);
        log::debug!(
            "Showing {} dialog '{}' with {} button(s)",
            dialog.kind,
            dialog.title,
            dialog.buttons.len()
        );

        self.generation = self.generation.wrapping_add(1);
        self.focused = None;
        self.dialog = Some(dialog);

        Task::perform(
            focus_after(self.focus_delay, self.generation),
            std::convert::identity,
        )
    }

    /// Hides the overlay and drops its dialog. Safe to call at any time.
    pub fn close(&mut self) {
        if self.dialog.take().is_some() {
            log::debug!("Message box closed");
        }
        self.focused = None;
    }

    /// Runs `callback` with the action of the button at `index`, then closes
    /// the box.
    ///
    /// The box closes whatever the callback returns; an `Err` is logged and
    /// swallowed. Buttons without an action just close. An index outside the
    /// footer, or a hidden box, is ignored.
    pub fn activate<T, E, F>(&mut self, index: usize, callback: F) -> Option<T>
    where
        E: fmt::Display,
        F: FnOnce(A) -> Result<T, E>,
    {
        let Some(button) = self.dialog.as_ref().and_then(|d| d.buttons.get(index)) else {
            log::debug!("Ignoring activation of missing button {index}");
            return None;
        };
        let label = button.label.clone();
        let action = button.action.clone();

        let output = action.and_then(|action| match callback(action) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("Action of button '{label}' failed: {err}");
                None
            }
        });

        self.close();
        output
    }

    /// Handles view and keyboard messages.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ButtonPressed(index) => {
                if self.is_visible() {
                    Event::Activated(index)
                } else {
                    Event::None
                }
            }
            Message::BackdropPressed => {
                if self.is_visible() {
                    self.close();
                    Event::Closed
                } else {
                    Event::None
                }
            }
            Message::FocusFirst(generation) => {
                if generation == self.generation && self.button_count() > 0 {
                    self.focused = Some(0);
                }
                Event::None
            }
            Message::FocusNext => {
                self.move_focus(true);
                Event::None
            }
            Message::FocusPrevious => {
                self.move_focus(false);
                Event::None
            }
            Message::ActivateFocused => match self.focused {
                Some(index) if self.is_visible() => Event::Activated(index),
                _ => Event::None,
            },
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.button_count();
        if count == 0 {
            return;
        }
        self.focused = Some(match (self.focused, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        });
    }
}

impl<A> Overlay<A> {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.dialog.is_some()
    }

    /// The dialog currently shown, if any.
    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog<A>> {
        self.dialog.as_ref()
    }

    /// Index of the focused footer button.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Counter bumped by every `show`; identifies the current dialog.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn button_count(&self) -> usize {
        self.dialog.as_ref().map_or(0, |d| d.buttons.len())
    }
}
