// SPDX-License-Identifier: MPL-2.0
//! Bundled image and sound resources.
//!
//! All gallery assets ship inside the binary so packaging never has to
//! locate files on disk. The image set is fixed, so a failed lookup is a
//! packaging defect; it degrades to an empty handle with a logged error
//! rather than a panic.

use iced::widget::image;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Resolves a bundled portrait image to a displayable handle.
#[must_use]
pub fn image_handle(name: &str) -> image::Handle {
    let path = format!("images/{name}");
    match Assets::get(&path) {
        Some(file) => image::Handle::from_bytes(file.data.into_owned()),
        None => {
            tracing::error!(name, "bundled image missing from the embedded asset set");
            image::Handle::from_bytes(Vec::new())
        }
    }
}

/// Returns the raw bytes of a bundled sound clip, or `None` if the logical
/// name is not part of the embedded asset set.
#[must_use]
pub fn sound_bytes(name: &str) -> Option<Vec<u8>> {
    let path = format!("sounds/{name}");
    Assets::get(&path).map(|file| file.data.into_owned())
}
