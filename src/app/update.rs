// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All three handlers are synchronous: scrolling only mirrors the offset,
//! and a button press resolves the record, fires the sound, and raises the
//! alert without blocking the event loop.

use super::{App, Message};
use crate::ui::alert::Alert;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Scrolled(offset) => {
            app.gallery.set_scroll_offset(offset.x);
        }
        Message::AnimalPressed(index) => handle_animal_pressed(app, index),
        Message::AlertDismissed => {
            app.alert = None;
        }
    }

    Task::none()
}

/// Resolves the pressed page back to its animal, logs the description,
/// fires the sound, and raises the alert.
///
/// The index was bound at page construction, so a miss means the view and
/// the gallery disagree: debug builds assert, release builds log and
/// degrade to a no-op.
fn handle_animal_pressed(app: &mut App, index: usize) {
    let Some(animal) = app.gallery.animal_at(index) else {
        debug_assert!(
            false,
            "pressed page index {index} has no animal (gallery len {})",
            app.gallery.len()
        );
        tracing::warn!(index, "ignoring press on a page with no matching animal");
        return;
    };

    tracing::info!("{animal}");

    let alert = Alert::for_animal(animal);
    let sound = animal.sound().to_string();
    play_sound(app, &sound);
    app.alert = Some(alert);
}

/// Fire-and-forget playback. Every failure is recoverable: log, keep the
/// UI responsive, and still show the alert.
fn play_sound(app: &mut App, name: &str) {
    let Some(player) = app.player.as_mut() else {
        return;
    };

    if let Err(err) = player.play_resource(name) {
        tracing::warn!(sound = name, %err, "sound playback failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::scrollable::AbsoluteOffset;

    fn scrolled(x: f32) -> Message {
        Message::Scrolled(AbsoluteOffset { x, y: 0.0 })
    }

    #[test]
    fn scrolling_mirrors_the_offset_and_moves_the_active_page() {
        let mut app = App::default();

        let _ = update(&mut app, scrolled(375.0));
        assert_eq!(app.gallery.scroll_offset(), 375.0);
        assert_eq!(app.gallery.active_index(), 1);

        let _ = update(&mut app, scrolled(187.5));
        assert_eq!(app.gallery.active_index(), 0);
    }

    #[test]
    fn pressing_a_page_raises_its_alert() {
        let mut app = App::default();
        let expected_title = {
            let animal = app.gallery.animal_at(1).expect("page 1 exists");
            animal.alert_title()
        };

        let _ = update(&mut app, Message::AnimalPressed(1));

        let alert = app.alert.as_ref().expect("alert raised");
        assert_eq!(alert.title(), expected_title);
    }

    #[test]
    fn dismissing_clears_the_alert() {
        let mut app = App::default();
        let _ = update(&mut app, Message::AnimalPressed(0));
        assert!(app.alert.is_some());

        let _ = update(&mut app, Message::AlertDismissed);
        assert!(app.alert.is_none());
    }

    #[test]
    fn a_new_press_replaces_the_previous_alert() {
        let mut app = App::default();
        let _ = update(&mut app, Message::AnimalPressed(0));
        let first = app.alert.clone();

        let _ = update(&mut app, Message::AnimalPressed(2));
        let second = app.alert.clone();

        assert!(first.is_some());
        assert!(second.is_some());
        assert_ne!(first, second);
    }
}
