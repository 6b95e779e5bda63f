// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use lastkings_ui::ui::design_tokens::{opacity, palette, sizing, spacing};
    use lastkings_ui::ui::message_box::Kind;
    use lastkings_ui::ui::styles::{button, container};

    #[test]
    fn all_button_styles_are_callable() {
        let theme = Theme::Light;

        let _ = button::primary(&theme, Status::Active);
        let _ = button::secondary(&theme, Status::Hovered);
        let _ = button::link(&theme, Status::Pressed);
        let _ = button::dialog(true, true)(&theme, Status::Active);
    }

    #[test]
    fn every_kind_has_a_banner_and_dialog_style() {
        let theme = Theme::Light;
        for kind in Kind::ALL {
            let _ = container::dialog(kind.color())(&theme);
            let _ = container::flash_banner(kind.color(), opacity::OPAQUE)(&theme);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::BACKDROP;
        assert!(sizing::DIALOG_WIDTH > sizing::ICON_MD);
    }
}
