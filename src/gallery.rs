// SPDX-License-Identifier: MPL-2.0
//! Paged gallery model: layout arithmetic and scroll-position resolvers.
//!
//! The gallery places one fixed-width page per animal side by side, so the
//! page at index `i` occupies the horizontal extent `[i*W, (i+1)*W)`. Two
//! pure resolvers derive display state from the scroll offset:
//! - the *active index*: which page currently fills most of the viewport;
//! - the *dimness*: a `[0, 1]` caption opacity, one when a page is settled
//!   and zero halfway through a swipe.

use crate::animal::Animal;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Default page width in logical pixels, matching the window width.
pub const DEFAULT_PAGE_WIDTH: f32 = 375.0;

/// Smallest accepted page width. Anything narrower is a configuration
/// mistake and gets clamped rather than producing a degenerate layout.
pub const MIN_PAGE_WIDTH: f32 = 1.0;

/// Page width in logical pixels, guaranteed strictly positive.
///
/// This type ensures layout arithmetic never divides by zero, eliminating
/// the need for manual validation at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageWidth(f32);

impl PageWidth {
    /// Creates a new page width, clamping non-finite or too-small values.
    #[must_use]
    pub fn new(width: f32) -> Self {
        if width.is_finite() {
            Self(width.max(MIN_PAGE_WIDTH))
        } else {
            Self(DEFAULT_PAGE_WIDTH)
        }
    }

    /// Returns the raw width value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for PageWidth {
    fn default() -> Self {
        Self(DEFAULT_PAGE_WIDTH)
    }
}

/// Resolves the page considered centered in the viewport for a scroll offset.
///
/// This is `floor((offset + W/2) / W)` clamped to `[0, len - 1]`. The clamp
/// covers the exact trailing scroll boundary, where rounding can push the
/// raw quotient one past the last valid index, and elastic overscroll on
/// either end. Returns 0 for an empty gallery.
#[must_use]
pub fn active_index(offset: f32, width: PageWidth, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    let raw = ((offset + width.value() / 2.0) / width.value()).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(len - 1)
    }
}

/// Resolves the caption opacity for a scroll offset.
///
/// One when the offset sits exactly on a page (settled), zero halfway
/// between two pages (maximal fade). Continuous and symmetric about each
/// midpoint; `rem_euclid` keeps it continuous through negative overscroll.
#[must_use]
pub fn dimness(offset: f32, width: PageWidth) -> f32 {
    let fractional = offset.rem_euclid(width.value()) / width.value();
    (0.5 - fractional).abs() * 2.0
}

/// Gallery state: the shuffled animal sequence plus a read-only mirror of
/// the scroll surface's horizontal offset.
///
/// The sequence is fixed at construction; only the offset changes afterward,
/// and only in response to scroll events. Both resolvers are O(1) and free
/// of side effects, so they can run on every scroll tick.
#[derive(Debug, Clone)]
pub struct GalleryState {
    animals: Vec<Animal>,
    page_width: PageWidth,
    scroll_offset: f32,
}

impl GalleryState {
    /// Builds the gallery, shuffling the roster once.
    ///
    /// A seed pins the resulting order (used by tests and the `--seed`
    /// flag); without one the order is random per launch.
    #[must_use]
    pub fn new(mut animals: Vec<Animal>, page_width: PageWidth, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => animals.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => animals.shuffle(&mut rand::thread_rng()),
        }

        Self {
            animals,
            page_width,
            scroll_offset: 0.0,
        }
    }

    /// Builds the gallery preserving the given order. Used where a
    /// deterministic order matters: the default state and tests.
    #[must_use]
    pub fn with_order(animals: Vec<Animal>, page_width: PageWidth) -> Self {
        Self {
            animals,
            page_width,
            scroll_offset: 0.0,
        }
    }

    /// The animals in gallery order.
    #[must_use]
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    /// Whether the gallery holds no animals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// The fixed page width.
    #[must_use]
    pub fn page_width(&self) -> PageWidth {
        self.page_width
    }

    /// The mirrored horizontal scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Mirrors a new offset reported by the scroll surface.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    /// Horizontal start of the page at `index`.
    #[must_use]
    pub fn page_start(&self, index: usize) -> f32 {
        index as f32 * self.page_width.value()
    }

    /// Total scrollable extent: `len * W`.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.animals.len() as f32 * self.page_width.value()
    }

    /// Index of the currently centered page.
    #[must_use]
    pub fn active_index(&self) -> usize {
        active_index(self.scroll_offset, self.page_width, self.animals.len())
    }

    /// Caption opacity for the current offset.
    #[must_use]
    pub fn dimness(&self) -> f32 {
        dimness(self.scroll_offset, self.page_width)
    }

    /// Checked lookup of the animal at a page index.
    ///
    /// Returns `None` for an out-of-range index; callers treat that as an
    /// integration error, not a recoverable condition.
    #[must_use]
    pub fn animal_at(&self, index: usize) -> Option<&Animal> {
        self.animals.get(index)
    }

    /// The animal on the currently centered page.
    #[must_use]
    pub fn active_animal(&self) -> Option<&Animal> {
        self.animals.get(self.active_index())
    }
}
