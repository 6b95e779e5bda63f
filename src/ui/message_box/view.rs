// SPDX-License-Identifier: MPL-2.0
//! Rendering of the message box over the page.

use super::markup;
use super::overlay::{Dialog, Message, Overlay};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the backdrop and dialog, or nothing while the box is hidden.
///
/// Presses on the backdrop emit [`Message::BackdropPressed`]; the dialog card
/// is opaque so presses inside it never reach the backdrop.
pub fn view<A>(overlay: &Overlay<A>) -> Option<Element<'_, Message>> {
    let dialog = overlay.dialog()?;
    let card = dialog_card(dialog, overlay.focused());

    let backdrop = center(opaque(card)).style(styles::container::backdrop);
    Some(opaque(mouse_area(backdrop).on_press(Message::BackdropPressed)))
}

fn dialog_card<A>(dialog: &Dialog<A>, focused: Option<usize>) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(dialog.icon()).size(sizing::ICON_MD))
        .push(Text::new(markup::to_plain_text(dialog.title())).size(typography::TITLE_MD));

    let body = Text::new(markup::to_plain_text(dialog.body())).size(typography::BODY);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(Container::new(header).padding([spacing::MD, spacing::LG]))
        .push(Container::new(body).padding([0.0, spacing::LG]));

    if !dialog.buttons().is_empty() {
        let buttons = dialog
            .buttons()
            .iter()
            .enumerate()
            .fold(Row::new().spacing(spacing::XS), |row, (index, spec)| {
                row.push(
                    button(Text::new(spec.label.as_str()).size(typography::BODY))
                        .padding([spacing::XS, spacing::MD])
                        .on_press(Message::ButtonPressed(index))
                        .style(styles::button::dialog(spec.primary, focused == Some(index))),
                )
            });

        let footer = Container::new(buttons)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .padding([spacing::SM, spacing::LG])
            .style(styles::container::dialog_footer);
        content = content.push(footer);
    }

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .style(styles::container::dialog(dialog.kind().color()))
        .into()
}
