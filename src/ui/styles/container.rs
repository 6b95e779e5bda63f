// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window backdrop behind the message box.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Dialog card with a kind-colored accent border.
pub fn dialog(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base;
        container::Style {
            background: Some(Background::Color(base.color)),
            text_color: Some(base.text),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: shadow::LG,
            ..Default::default()
        }
    }
}

/// Footer strip holding the dialog buttons.
pub fn dialog_footer(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(Background::Color(weak)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Flash banner tinted with the kind color. `alpha` fades the whole banner.
pub fn flash_banner(accent: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let text = theme.palette().text;
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::BANNER_TINT * alpha,
                ..accent
            })),
            text_color: Some(Color {
                a: text.a * alpha,
                ..text
            }),
            border: Border {
                color: Color {
                    a: alpha,
                    ..accent
                },
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Status line along the bottom edge.
pub fn status_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Generic panel surface for the register lines.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::OPAQUE,
        ))),
        border: Border {
            color: palette::GRAY_100,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_uses_accent_border() {
        let style = dialog(palette::SUCCESS_500)(&Theme::Light);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn faded_banner_is_transparent() {
        let style = flash_banner(palette::ERROR_500, 0.0)(&Theme::Light);
        assert_eq!(style.border.color.a, 0.0);
        assert_eq!(style.text_color.map(|c| c.a), Some(0.0));
    }

    #[test]
    fn backdrop_dims_the_page() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::BACKDROP),
            _ => panic!("expected color background"),
        }
    }
}
