// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced_menagerie::animal;
use iced_menagerie::config::{self, Config};
use iced_menagerie::gallery::{GalleryState, PageWidth, DEFAULT_PAGE_WIDTH};
use tempfile::tempdir;

#[test]
fn scroll_scenario_matches_the_paging_contract() {
    // W=375, N=3: the three checkpoints from the paging contract.
    let mut gallery = GalleryState::with_order(animal::roster(), PageWidth::default());

    gallery.set_scroll_offset(0.0);
    assert_eq!(gallery.active_index(), 0);
    assert_abs_diff_eq!(gallery.dimness(), 1.0, epsilon = 1e-6);

    gallery.set_scroll_offset(187.5);
    assert_eq!(gallery.active_index(), 0);
    assert_abs_diff_eq!(gallery.dimness(), 0.0, epsilon = 1e-6);

    gallery.set_scroll_offset(375.0);
    assert_eq!(gallery.active_index(), 1);
    assert_abs_diff_eq!(gallery.dimness(), 1.0, epsilon = 1e-6);

    // The trailing scroll boundary stays on the last page.
    gallery.set_scroll_offset(3.0 * DEFAULT_PAGE_WIDTH);
    assert_eq!(gallery.active_index(), 2);
}

#[test]
fn every_page_resolves_back_to_its_own_animal() {
    let gallery = GalleryState::new(animal::roster(), PageWidth::default(), Some(5));

    let placed: Vec<String> = gallery
        .animals()
        .iter()
        .map(|animal| animal.name().to_string())
        .collect();

    for (index, name) in placed.iter().enumerate() {
        let resolved = gallery.animal_at(index).expect("index built a page");
        assert_eq!(resolved.name(), name);
    }
    assert!(gallery.animal_at(placed.len()).is_none());
}

#[test]
fn the_alert_description_is_word_for_word() {
    let roster = animal::roster();
    let liono = roster
        .iter()
        .find(|animal| animal.name() == "Liono")
        .expect("Liono is in the roster");

    assert_eq!(
        liono.description(),
        "Liono is a 6 year old Lion and a valiant defender of Thundaria!"
    );
}

#[test]
fn settings_round_trip_through_a_directory_override() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let written = Config {
        shuffle_seed: Some(11),
        page_width: Some(320.0),
    };
    config::save(&written, Some(dir.path())).expect("Failed to save config");

    let loaded = config::load(Some(dir.path()));
    assert_eq!(loaded, written);

    // The configured width flows through the clamped newtype.
    let width = loaded.page_width.map(PageWidth::new).unwrap_or_default();
    let gallery = GalleryState::new(animal::roster(), width, loaded.shuffle_seed);
    assert_abs_diff_eq!(gallery.content_width(), 3.0 * 320.0, epsilon = 1e-6);
}

#[test]
fn a_configured_seed_pins_the_gallery_order() {
    let order = |seed| -> Vec<String> {
        GalleryState::new(animal::roster(), PageWidth::default(), Some(seed))
            .animals()
            .iter()
            .map(|animal| animal.name().to_string())
            .collect()
    };

    assert_eq!(order(3), order(3));
}
