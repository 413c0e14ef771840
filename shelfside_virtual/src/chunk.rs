// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-size contiguous chunks over a layout's item list.

use alloc::vec::Vec;
use core::ops::Range;

use shelfside_layout::LayoutItem;

/// Default maximum number of items per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 200;

/// A contiguous slice of the ordered item list, the unit of visibility
/// culling.
///
/// The vertical extent is the min/max over the members' `y` and `y + h`. It
/// is conservative, not tight: jitter and the row wave can push items outside
/// their nominal rows, and the extent must still cover them. The extent is
/// used only for culling decisions, never for final rendering positions.
///
/// Chunks partition the item list in layout order with no gaps or overlaps.
/// They are rebuilt wholesale whenever the item list changes and are never
/// mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    /// Index range of the members within the item list.
    pub indices: Range<usize>,
    /// Topmost member edge.
    pub start_y: f64,
    /// Bottommost member edge.
    pub end_y: f64,
}

impl Chunk {
    /// Number of items in this chunk.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.end - self.indices.start
    }

    /// Returns `true` if the chunk holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Reserved height for this chunk's placeholder.
    #[must_use]
    pub fn reserved_extent(&self) -> f64 {
        (self.end_y - self.start_y).max(0.0)
    }

    /// Returns `true` if the chunk's vertical extent intersects `window`.
    #[must_use]
    pub fn intersects(&self, window: &Range<f64>) -> bool {
        self.start_y < window.end && self.end_y > window.start
    }
}

/// Partitions `items` into chunks of at most `chunk_size` members.
///
/// A `chunk_size` of zero is treated as one. The resulting chunks cover every
/// item exactly once, in layout order.
#[must_use]
pub fn build_chunks(items: &[LayoutItem], chunk_size: usize) -> Vec<Chunk> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::with_capacity(items.len().div_ceil(chunk_size));
    let mut start = 0;
    while start < items.len() {
        let end = (start + chunk_size).min(items.len());
        let mut start_y = f64::INFINITY;
        let mut end_y = f64::NEG_INFINITY;
        for item in &items[start..end] {
            start_y = start_y.min(item.y);
            end_y = end_y.max(item.y + item.h);
        }
        chunks.push(Chunk {
            indices: start..end,
            start_y,
            end_y,
        });
        start = end;
    }
    chunks
}
