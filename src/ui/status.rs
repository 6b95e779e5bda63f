// SPDX-License-Identifier: MPL-2.0
//! Status line along the bottom of the page.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// Plain-text status display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
}

impl StatusLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Replaces the text verbatim. Nothing in it is interpreted as markup.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        Container::new(Text::new(self.text.as_str()).size(typography::CAPTION))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::STATUS_BAR_HEIGHT))
            .padding([0.0, spacing::SM])
            .align_y(alignment::Vertical::Center)
            .style(styles::container::status_bar)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_text_verbatim() {
        let mut status = StatusLine::default();
        status.set("<b>Ready</b> &amp; waiting");
        assert_eq!(status.text(), "<b>Ready</b> &amp; waiting");
    }
}
