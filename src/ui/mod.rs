// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`page`] - One gallery page (portrait band over name button)
//! - [`alert`] - Modal description alert with a single acknowledgement
//! - [`theme`] - Centralized colors and style closures

pub mod alert;
pub mod page;
pub mod theme;
