// SPDX-License-Identifier: MPL-2.0
//! The animal record and the fixed three-animal roster.
//!
//! Records are immutable after construction: the gallery only ever reads
//! them, and every display string (caption, alert, console description) is
//! derived on demand.

use iced::widget::image;
use std::fmt;

use crate::assets;

/// One animal character: display fields plus handles to its bundled assets.
#[derive(Debug, Clone)]
pub struct Animal {
    name: String,
    species: String,
    age: u32,
    image: image::Handle,
    sound: String,
    character: String,
}

impl Animal {
    /// Creates a record. `sound` is the logical resource name resolved by
    /// [`assets::sound_bytes`] when the animal's button is pressed.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        age: u32,
        image: image::Handle,
        sound: impl Into<String>,
        character: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            age,
            image,
            sound: sound.into(),
            character: character.into(),
        }
    }

    /// Display identifier, shown on the page button.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Species label, shown as the paging caption.
    #[must_use]
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Age in years.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Handle to the bundled portrait image.
    #[must_use]
    pub fn image(&self) -> &image::Handle {
        &self.image
    }

    /// Logical name of the bundled sound clip.
    #[must_use]
    pub fn sound(&self) -> &str {
        &self.sound
    }

    /// Short trait adjective used in the alert description.
    #[must_use]
    pub fn character(&self) -> &str {
        &self.character
    }

    /// The alert body shown when this animal's button is pressed.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "{} is a {} year old {} and a {} defender of Thundaria!",
            self.name, self.age, self.species, self.character
        )
    }

    /// The alert title.
    #[must_use]
    pub fn alert_title(&self) -> String {
        format!("Meet {}", self.name)
    }

    /// Label of the alert's single acknowledgement button.
    #[must_use]
    pub fn alert_dismiss_label(&self) -> String {
        format!("Hi {}!", self.name)
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Animal: name = {}, species = {}, age = {}",
            self.name, self.species, self.age
        )
    }
}

/// Builds the three canonical animals with their bundled assets, in their
/// unshuffled order. The gallery shuffles a copy once at startup.
#[must_use]
pub fn roster() -> Vec<Animal> {
    vec![
        Animal::new(
            "Panthro",
            "Panther",
            5,
            assets::image_handle("panthro.png"),
            "panther.wav",
            "proud",
        ),
        Animal::new(
            "Tygra",
            "Tiger",
            6,
            assets::image_handle("tygra.png"),
            "tiger.wav",
            "noble",
        ),
        Animal::new(
            "Liono",
            "Lion",
            6,
            assets::image_handle("liono.png"),
            "lion.wav",
            "valiant",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_matches_the_alert_format() {
        let liono = Animal::new(
            "Liono",
            "Lion",
            6,
            image::Handle::from_bytes(Vec::new()),
            "lion.wav",
            "valiant",
        );
        assert_eq!(
            liono.description(),
            "Liono is a 6 year old Lion and a valiant defender of Thundaria!"
        );
    }

    #[test]
    fn alert_labels_carry_the_name() {
        let liono = Animal::new(
            "Liono",
            "Lion",
            6,
            image::Handle::from_bytes(Vec::new()),
            "lion.wav",
            "valiant",
        );
        assert_eq!(liono.alert_title(), "Meet Liono");
        assert_eq!(liono.alert_dismiss_label(), "Hi Liono!");
    }

    #[test]
    fn display_prints_the_console_description() {
        let tygra = Animal::new(
            "Tygra",
            "Tiger",
            6,
            image::Handle::from_bytes(Vec::new()),
            "tiger.wav",
            "noble",
        );
        assert_eq!(
            tygra.to_string(),
            "Animal: name = Tygra, species = Tiger, age = 6"
        );
    }

    #[test]
    fn roster_holds_the_three_characters() {
        let roster = roster();
        assert_eq!(roster.len(), 3);

        let names: Vec<&str> = roster.iter().map(Animal::name).collect();
        assert_eq!(names, ["Panthro", "Tygra", "Liono"]);

        for animal in &roster {
            assert!(animal.age() > 0);
            assert!(animal.sound().ends_with(".wav"));
        }
    }
}
