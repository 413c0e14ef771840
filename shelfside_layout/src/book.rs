// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input record for the layout engine.

use alloc::string::String;

/// A physical book to be placed on the shelf.
///
/// Dimensions are in millimeters. The layout engine only reads the id and the
/// three dimensions; anything else a host tracks about a book (cover image,
/// reading status, and so on) stays on the host side and is re-associated via
/// the id after layout.
///
/// A book participates in layout only when it is *placeable*: all dimensions
/// finite and the height strictly positive (height is used as a divisor
/// during normalization). Non-placeable books are silently skipped, never an
/// error — see [`crate::compute_layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    /// Unique identifier, carried through to [`crate::LayoutItem::id`].
    ///
    /// The id also seeds the per-item jitter, so two books with the same id
    /// receive identical perturbations.
    pub id: String,
    /// Cover width in millimeters.
    pub width_mm: f64,
    /// Cover height in millimeters. Must be `> 0` to be placeable.
    pub height_mm: f64,
    /// Spine thickness in millimeters.
    pub thickness_mm: f64,
}

impl Book {
    /// Creates a book from an id and millimeter dimensions.
    #[must_use]
    pub fn new(id: impl Into<String>, width_mm: f64, height_mm: f64, thickness_mm: f64) -> Self {
        Self {
            id: id.into(),
            width_mm,
            height_mm,
            thickness_mm,
        }
    }

    /// Returns `true` if this book can participate in a layout pass.
    ///
    /// Requires finite dimensions, a strictly positive height, and
    /// non-negative width and thickness.
    #[must_use]
    pub fn is_placeable(&self) -> bool {
        self.width_mm.is_finite()
            && self.height_mm.is_finite()
            && self.thickness_mm.is_finite()
            && self.height_mm > 0.0
            && self.width_mm >= 0.0
            && self.thickness_mm >= 0.0
    }
}
