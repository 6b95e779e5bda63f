// SPDX-License-Identifier: MPL-2.0
//! Modal message box for alerts and confirmations.
//!
//! # Components
//!
//! - [`kind`] - The closed set of dialog kinds with their icon and colors
//! - [`options`] - Dialog configuration and the success/error/warning/info/confirm constructors
//! - [`overlay`] - `Overlay` state: show, close, focus and button activation
//! - [`markup`] - Flattening of body markup into displayable text
//! - [`view`] - Backdrop and dialog rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::message_box::{Options, Overlay};
//!
//! let mut overlay = Overlay::new(Duration::from_millis(100));
//! let focus = overlay.show(Options::confirm("Void this sale?", None, Some(Action::Void), None));
//!
//! // Later, when the view reports `Event::Activated(index)`:
//! overlay.activate(index, |action| perform(action));
//! ```
//!
//! Buttons report an action tag instead of running a closure, keeping the
//! dialog free of business logic. `activate` runs the caller's handler first
//! and closes the box afterwards even when the handler fails.

pub mod kind;
pub mod markup;
pub mod options;
pub mod overlay;
mod view;

pub use kind::{Kind, UnknownKind};
pub use options::{Button, Options};
pub use overlay::{Dialog, Event, Message, Overlay};
pub use view::view;
