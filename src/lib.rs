// SPDX-License-Identifier: MPL-2.0
//! `lastkings_ui` is the page-level feedback layer of the LastKings point of
//! sale front end, built with the Iced GUI framework.
//!
//! It provides flash banners that dismiss themselves once the page is ready,
//! a reusable modal message box with success/error/warning/info/confirm
//! shortcuts, and a plain-text status line, all owned by a
//! [`ui::context::UiContext`].

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
