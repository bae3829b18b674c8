// SPDX-License-Identifier: MPL-2.0
//! A single gallery page: the animal's portrait over its name button.
//!
//! Each page is built already bound to its press message, so the update
//! path never has to recover the record from a widget tag.

use crate::animal::Animal;
use crate::ui::theme;
use iced::widget::image::Image;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Height of the portrait band within a page.
pub const IMAGE_BAND_HEIGHT: f32 = 350.0;

/// Height of the name button band within a page.
pub const BUTTON_BAND_HEIGHT: f32 = 100.0;

const NAME_TEXT_SIZE: f32 = 24.0;

/// Renders one page of exactly `width` logical pixels. `on_press` is the
/// message emitted when the name button is pressed, carrying whatever
/// identity the caller bound to this page at construction.
pub fn view<'a, M: Clone + 'a>(animal: &'a Animal, width: f32, on_press: M) -> Element<'a, M> {
    let portrait = Container::new(
        Image::new(animal.image().clone())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(width))
    .height(Length::Fixed(IMAGE_BAND_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let name_button = button(
        Container::new(Text::new(animal.name()).size(NAME_TEXT_SIZE))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(width))
    .height(Length::Fixed(BUTTON_BAND_HEIGHT))
    .style(theme::page_button)
    .on_press(on_press);

    Column::new().push(portrait).push(name_button).into()
}
