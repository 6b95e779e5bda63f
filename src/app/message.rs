// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::register::LineId;
use crate::ui::message_box::{self, Kind};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The page finished building; pre-rendered banners start their timers.
    PageReady,
    /// Periodic tick while flash banners are fading.
    Tick(Instant),
    MessageBox(message_box::Message),
    AddItem,
    RemoveLineRequested(LineId),
    CompleteSale,
    VoidSaleRequested,
    ShowHelp,
    /// Adds a banner after page-ready and schedules it explicitly.
    Flash(Kind, String),
    UpdateStatus(String),
}

/// What a message box button does once pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RemoveLine(LineId),
    KeepLine(LineId),
    VoidSale,
    KeepSale,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LASTKINGS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Pre-rendered banners as `kind:text`.
    pub flashes: Vec<String>,
    /// Initial status line text.
    pub status: Option<String>,
}

/// Splits a `kind:text` banner spec. Unknown kinds become info banners; a
/// spec without a colon is shown whole as an info banner.
#[must_use]
pub fn parse_flash_spec(spec: &str) -> (Kind, String) {
    match spec.split_once(':') {
        Some((kind, text)) => (Kind::from_category(kind), text.trim().to_string()),
        None => (Kind::Info, spec.trim().to_string()),
    }
}
