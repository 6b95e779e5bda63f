// SPDX-License-Identifier: MPL-2.0
//! Dialog configuration and the convenience constructors built on it.
//!
//! Buttons carry an optional action tag of the caller's type `A` instead of a
//! callback. When a button is activated the overlay hands the tag back to the
//! caller, which decides what it means.

use super::kind::Kind;

/// Title used when [`Options`] is built without one.
pub const DEFAULT_TITLE: &str = "Message";
/// Label of the default acknowledgement button.
pub const OK_LABEL: &str = "OK";
pub const CANCEL_LABEL: &str = "Cancel";
pub const CONFIRM_LABEL: &str = "Confirm";
/// Title of confirmation dialogs when none is given.
pub const CONFIRM_TITLE: &str = "Confirm";

/// A footer button.
#[derive(Debug, Clone, PartialEq)]
pub struct Button<A> {
    pub label: String,
    pub primary: bool,
    /// Action reported on activation. `None` only closes the box.
    pub action: Option<A>,
}

impl<A> Button<A> {
    /// Creates an emphasized button without an action.
    pub fn primary(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            primary: true,
            action: None,
        }
    }

    /// Creates a regular button without an action.
    pub fn secondary(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            primary: false,
            action: None,
        }
    }

    /// Attaches the action reported when the button is activated.
    #[must_use]
    pub fn on_activate(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    fn with_action(mut self, action: Option<A>) -> Self {
        self.action = action;
        self
    }
}

/// Everything needed to build one dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct Options<A> {
    pub kind: Kind,
    pub title: String,
    /// Body markup; see [`super::markup`].
    pub body: String,
    /// Footer buttons in display order. An empty list renders no footer.
    pub buttons: Vec<Button<A>>,
}

impl<A> Default for Options<A> {
    fn default() -> Self {
        Self {
            kind: Kind::Info,
            title: DEFAULT_TITLE.to_string(),
            body: String::new(),
            buttons: vec![Button::primary(OK_LABEL)],
        }
    }
}

impl<A> Options<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Replaces the default OK button.
    #[must_use]
    pub fn buttons(mut self, buttons: Vec<Button<A>>) -> Self {
        self.buttons = buttons;
        self
    }

    /// Single-OK dialog of the given kind, titled with the kind's default
    /// title unless `title` is given.
    pub fn alert(kind: Kind, message: impl Into<String>, title: Option<&str>) -> Self {
        Self::new()
            .kind(kind)
            .title(non_empty(title).unwrap_or(kind.default_title()))
            .body(message)
    }

    pub fn success(message: impl Into<String>, title: Option<&str>) -> Self {
        Self::alert(Kind::Success, message, title)
    }

    pub fn error(message: impl Into<String>, title: Option<&str>) -> Self {
        Self::alert(Kind::Error, message, title)
    }

    pub fn warning(message: impl Into<String>, title: Option<&str>) -> Self {
        Self::alert(Kind::Warning, message, title)
    }

    pub fn info(message: impl Into<String>, title: Option<&str>) -> Self {
        Self::alert(Kind::Info, message, title)
    }

    /// Warning dialog with exactly two buttons: Cancel (secondary) then
    /// Confirm (primary). Cancel comes first and therefore gets the initial
    /// focus.
    pub fn confirm(
        message: impl Into<String>,
        title: Option<&str>,
        on_confirm: Option<A>,
        on_cancel: Option<A>,
    ) -> Self {
        Self::new()
            .kind(Kind::Warning)
            .title(non_empty(title).unwrap_or(CONFIRM_TITLE))
            .body(message)
            .buttons(vec![
                Button::secondary(CANCEL_LABEL).with_action(on_cancel),
                Button::primary(CONFIRM_LABEL).with_action(on_confirm),
            ])
    }
}

/// An empty title counts as no title.
fn non_empty(title: Option<&str>) -> Option<&str> {
    title.filter(|title| !title.is_empty())
}
