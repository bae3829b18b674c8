// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use iced::widget::scrollable::AbsoluteOffset;
use std::path::PathBuf;

/// Messages consumed by `App::update`. The scroll surface and the page
/// buttons are the only event sources; both deliver serially through the
/// Iced event loop.
#[derive(Debug, Clone)]
pub enum Message {
    /// The gallery scroll surface reported a new absolute offset.
    Scrolled(AbsoluteOffset),
    /// The name button of the page built at this index was pressed.
    AnimalPressed(usize),
    /// The alert's acknowledgement button (or backdrop) was pressed.
    AlertDismissed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Pins the gallery shuffle order. Takes precedence over the
    /// `shuffle_seed` config entry.
    pub seed: Option<u64>,
    /// Config directory override (for settings.toml).
    /// Takes precedence over the `MENAGERIE_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
}
