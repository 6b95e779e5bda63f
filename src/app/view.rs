// SPDX-License-Identifier: MPL-2.0
//! View rendering for the register screen.
//!
//! The page (toolbar, banners, sale lines, status line) sits at the bottom
//! of a stack; the message box overlay, when visible, is layered on top and
//! captures every click outside its dialog.

use super::register::{format_money, Register, SaleLine};
use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{flash, message_box, styles};
use iced::widget::{button, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::SM)
        .push(toolbar())
        .push(flash::view(&app.ui.flash, app.now))
        .push(sale(&app.register));

    if let Some(status) = app.ui.status() {
        page = page.push(status.view());
    }

    let page = Container::new(page.width(Length::Fill).height(Length::Fill))
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(page);
    if let Some(overlay) = app.ui.overlay().and_then(message_box::view) {
        layers = layers.push(overlay.map(Message::MessageBox));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

fn toolbar<'a>() -> Element<'a, Message> {
    let action = |label: &'a str, message: Message| {
        button(Text::new(label).size(typography::BODY))
            .on_press(message)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary)
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("LastKings POS").size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("Add item").size(typography::BODY))
                .on_press(Message::AddItem)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .push(action("Complete sale", Message::CompleteSale))
        .push(action("Void sale", Message::VoidSaleRequested))
        .push(action("Help", Message::ShowHelp))
        .into()
}

fn sale(register: &Register) -> Element<'_, Message> {
    let body: Element<'_, Message> = if register.is_empty() {
        Container::new(Text::new("No items on this sale yet.").size(typography::BODY))
            .padding(spacing::MD)
            .center_x(Length::Fill)
            .into()
    } else {
        let lines = register
            .lines()
            .iter()
            .fold(Column::new().spacing(spacing::XXS), |column, line| {
                column.push(sale_line(line))
            });
        scrollable(lines).height(Length::Fill).into()
    };

    let total = Row::new()
        .push(Text::new("Total").size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(format_money(register.total_cents())).size(typography::TITLE_SM));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Container::new(body).height(Length::Fill))
            .push(total),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn sale_line(line: &SaleLine) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(line.name.as_str()).size(typography::BODY).width(Length::Fill))
        .push(Text::new(format_money(line.price_cents)).size(typography::BODY))
        .push(
            button(Text::new("Remove").size(typography::CAPTION))
                .on_press(Message::RemoveLineRequested(line.id))
                .style(styles::button::link),
        )
        .into()
}
