// SPDX-License-Identifier: MPL-2.0
//! Rendering of the flash banners.

use super::banner::FlashMessage;
use super::board::Board;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Renders one banner at the opacity it has at `now`.
fn banner<'a, Message: 'a>(flash: &'a FlashMessage, now: Instant) -> Element<'a, Message> {
    let alpha = flash.opacity(now);
    let kind = flash.kind();

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(kind.icon()).size(typography::BODY))
        .push(Text::new(flash.text()).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(styles::container::flash_banner(kind.color(), alpha))
        .into()
}

/// Renders all banners stacked in document order.
pub fn view<'a, Message: 'a>(board: &'a Board, now: Instant) -> Element<'a, Message> {
    board
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, flash| {
            column.push(banner(flash, now))
        })
        .width(Length::Fill)
        .into()
}
