// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the sound
//! player, and the modal alert.
//!
//! The `App` struct owns everything the screen needs: the shuffled gallery,
//! the live audio handle, and the alert slot. Policy decisions (window
//! size, seed precedence, degraded startup without audio) stay close to the
//! boot path so user-facing behavior is easy to audit.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::animal;
use crate::audio::SoundPlayer;
use crate::config::{self, Config};
use crate::gallery::{GalleryState, PageWidth};
use crate::ui::alert::Alert;
use crate::ui::page;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Fixed window height: caption band plus the two page bands.
pub const WINDOW_HEIGHT: f32 =
    view::CAPTION_BAND_HEIGHT + page::IMAGE_BAND_HEIGHT + page::BUTTON_BAND_HEIGHT;

/// Effective startup settings after merging CLI flags with the settings
/// file. Resolved once in [`run`] so the window sizing and the gallery
/// state cannot disagree on the page width.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Settings {
    page_width: PageWidth,
    seed: Option<u64>,
}

impl Settings {
    /// CLI values win over file values.
    fn resolve(flags: &Flags, config: &Config) -> Self {
        Self {
            page_width: config.page_width.map(PageWidth::new).unwrap_or_default(),
            seed: flags.seed.or(config.shuffle_seed),
        }
    }
}

/// Root Iced application state.
pub struct App {
    gallery: GalleryState,
    alert: Option<Alert>,
    /// `None` when no audio output device was available at startup; every
    /// later press simply skips playback.
    player: Option<SoundPlayer>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", &self.gallery)
            .field("alert", &self.alert)
            .field("has_player", &self.player.is_some())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            gallery: GalleryState::with_order(animal::roster(), PageWidth::default()),
            alert: None,
            player: None,
        }
    }
}

impl App {
    /// Initializes application state from the resolved startup settings.
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let player = match SoundPlayer::new() {
            Ok(player) => Some(player),
            Err(err) => {
                tracing::warn!(%err, "starting without sound playback");
                None
            }
        };

        let app = App {
            gallery: GalleryState::new(animal::roster(), settings.page_width, settings.seed),
            alert: None,
            player,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("It's a Zoo in There")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

/// Builds the window settings for the given page width. The window is
/// exactly one page wide and not resizable, so the paging arithmetic and
/// the viewport always agree.
pub fn window_settings(page_width: PageWidth) -> window::Settings {
    window::Settings {
        size: iced::Size::new(page_width.value(), WINDOW_HEIGHT),
        resizable: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // The window is sized before boot, so settings are resolved up front
    // and the same values feed both the window and the gallery state.
    let config = config::load(flags.config_dir.as_deref());
    let settings = Settings::resolve(&flags, &config);

    iced::application(move || App::new(settings), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(settings.page_width))
        .run()
}
