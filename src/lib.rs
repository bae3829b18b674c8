// SPDX-License-Identifier: MPL-2.0
//! `iced_menagerie` is a single-screen animal gallery built with the Iced
//! GUI framework.
//!
//! Three animal characters sit side by side in a horizontally paged scroll
//! surface; a caption names the centered animal's species and fades during
//! swipes, and pressing an animal's button plays its sound clip and raises
//! a modal description alert.

pub mod animal;
pub mod app;
pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod gallery;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
