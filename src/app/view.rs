// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The base surface is a caption band over the horizontally paged gallery;
//! when an alert is active it is stacked on top as a modal overlay.

use super::{App, Message};
use crate::ui::{alert, page, theme};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{Column, Container, Row, Scrollable, Stack, Text};
use iced::{alignment, Element, Length};

/// Height of the caption band above the gallery.
pub const CAPTION_BAND_HEIGHT: f32 = 50.0;

const CAPTION_TEXT_SIZE: f32 = 28.0;

pub fn view(app: &App) -> Element<'_, Message> {
    let base = Column::new().push(view_caption(app)).push(view_gallery(app));

    match &app.alert {
        Some(active) => Stack::new()
            .push(base)
            .push(alert::view(active, Message::AlertDismissed))
            .into(),
        None => base.into(),
    }
}

/// Species of the centered animal, faded by the current dimness.
fn view_caption(app: &App) -> Element<'_, Message> {
    let species = app
        .gallery
        .active_animal()
        .map(|animal| animal.species())
        .unwrap_or_default();

    let caption = Text::new(species)
        .size(CAPTION_TEXT_SIZE)
        .style(theme::caption(app.gallery.dimness()));

    Container::new(caption)
        .width(Length::Fill)
        .height(Length::Fixed(CAPTION_BAND_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// One fixed-width page per animal inside a horizontal scroll surface
/// sized to exactly one page, so each page swipe is one item.
fn view_gallery(app: &App) -> Element<'_, Message> {
    let width = app.gallery.page_width().value();

    let mut pages = Row::new();
    for (index, animal) in app.gallery.animals().iter().enumerate() {
        pages = pages.push(page::view(animal, width, Message::AnimalPressed(index)));
    }

    Scrollable::new(pages)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset()))
        .into()
}
