// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`context`] - Page-level owner of the feedback components
//! - [`flash`] - Banners that fade out and disappear after page-ready
//! - [`message_box`] - Modal alert/confirm dialog on a click-catching backdrop
//! - [`status`] - Plain-text status line
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod context;
pub mod design_tokens;
pub mod flash;
pub mod message_box;
pub mod status;
pub mod styles;
