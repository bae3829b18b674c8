// SPDX-License-Identifier: MPL-2.0
//! Shared color helpers and style closures for the gallery and its alert.

use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme};

/// Caption text color: black with the current dimness as alpha, so the
/// label is fully visible on a settled page and vanishes mid-swipe.
#[must_use]
pub fn caption_color(dimness: f32) -> Color {
    Color {
        a: dimness.clamp(0.0, 1.0),
        ..Color::BLACK
    }
}

/// Caption text style for the current dimness value.
pub fn caption(dimness: f32) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(caption_color(dimness)),
    }
}

/// Name button at the bottom of each page.
pub fn page_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => palette.primary.weak.color,
        button::Status::Pressed => palette.primary.strong.color,
        _ => palette.primary.base.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.primary.base.text,
        ..button::Style::default()
    }
}

/// Dimmed full-window backdrop behind the alert card.
pub fn alert_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.45,
            ..Color::BLACK
        })),
        ..Default::default()
    }
}

/// The alert card itself.
pub fn alert_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.3,
                ..Color::BLACK
            },
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// The alert's single acknowledgement button.
pub fn alert_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        _ => palette.primary.base.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.primary.base.text,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_alpha_tracks_dimness() {
        assert_eq!(caption_color(1.0).a, 1.0);
        assert_eq!(caption_color(0.0).a, 0.0);
        assert_eq!(caption_color(0.25).a, 0.25);
    }

    #[test]
    fn caption_alpha_is_clamped() {
        assert_eq!(caption_color(4.0).a, 1.0);
        assert_eq!(caption_color(-1.0).a, 0.0);
    }
}
