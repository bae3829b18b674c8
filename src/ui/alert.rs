// SPDX-License-Identifier: MPL-2.0
//! Modal alert: a dismissible informational dialog with a single
//! acknowledgement action, rendered as a full-window overlay.

use crate::animal::Animal;
use crate::ui::theme;
use iced::widget::{button, mouse_area, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

const TITLE_TEXT_SIZE: f32 = 22.0;
const BODY_TEXT_SIZE: f32 = 16.0;
const CARD_WIDTH: f32 = 300.0;

/// The strings shown by the alert, captured when the button press is
/// resolved so the overlay does not borrow gallery state.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    title: String,
    body: String,
    dismiss_label: String,
}

impl Alert {
    /// Builds the alert content for a resolved animal record.
    #[must_use]
    pub fn for_animal(animal: &Animal) -> Self {
        Self {
            title: animal.alert_title(),
            body: animal.description(),
            dismiss_label: animal.alert_dismiss_label(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn dismiss_label(&self) -> &str {
        &self.dismiss_label
    }
}

/// Renders the full-window overlay: a dimmed backdrop (press to dismiss)
/// with the alert card centered on top.
pub fn view<'a, M: Clone + 'a>(alert: &'a Alert, on_dismiss: M) -> Element<'a, M> {
    let dismiss_button = button(Text::new(alert.dismiss_label()).size(BODY_TEXT_SIZE))
        .style(theme::alert_button)
        .padding([8, 16])
        .on_press(on_dismiss.clone());

    let card_content = Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(alert.title()).size(TITLE_TEXT_SIZE))
        .push(Text::new(alert.body()).size(BODY_TEXT_SIZE))
        .push(dismiss_button);

    let card = Container::new(card_content)
        .width(Length::Fixed(CARD_WIDTH))
        .padding(20)
        .style(theme::alert_card);

    let backdrop = mouse_area(
        Container::new(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::alert_backdrop),
    )
    .on_press(on_dismiss);

    let centered_card = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new().push(backdrop).push(centered_card).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image;

    #[test]
    fn alert_content_comes_from_the_record() {
        let liono = Animal::new(
            "Liono",
            "Lion",
            6,
            image::Handle::from_bytes(Vec::new()),
            "lion.wav",
            "valiant",
        );
        let alert = Alert::for_animal(&liono);

        assert_eq!(alert.title(), "Meet Liono");
        assert_eq!(
            alert.body(),
            "Liono is a 6 year old Lion and a valiant defender of Thundaria!"
        );
        assert_eq!(alert.dismiss_label(), "Hi Liono!");
    }
}
