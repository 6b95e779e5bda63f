// SPDX-License-Identifier: MPL-2.0
//! Dialog kinds and their fixed visual treatment.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of dialog kinds. Controls icon, accent color and default title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

/// Returned when a string names no known [`Kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dialog kind: {}", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info];

    /// Glyph shown in the dialog header.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Kind::Success => "✅",
            Kind::Error => "❌",
            Kind::Warning => "⚠️",
            Kind::Info => "ℹ️",
        }
    }

    /// Title used by the convenience constructors when none is given.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Kind::Success => "Success",
            Kind::Error => "Error",
            Kind::Warning => "Warning",
            Kind::Info => "Information",
        }
    }

    /// Accent color for borders and banners.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }

    /// Maps a loosely typed category (command line, server flash category)
    /// onto a kind. `danger` is accepted for errors; anything unrecognized
    /// falls back to [`Kind::Info`].
    #[must_use]
    pub fn from_category(category: &str) -> Self {
        match category.trim().to_ascii_lowercase().as_str() {
            "danger" => Kind::Error,
            other => other.parse().unwrap_or_else(|err: UnknownKind| {
                log::warn!("{err}; falling back to info");
                Kind::Info
            }),
        }
    }
}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Kind::Success),
            "error" => Ok(Kind::Error),
            "warning" => Ok(Kind::Warning),
            "info" => Ok(Kind::Info),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
