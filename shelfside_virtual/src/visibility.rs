// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-cycle visibility decisions over chunk extents.

use smallvec::SmallVec;

use crate::chunk::Chunk;

bitflags::bitflags! {
    /// Why a chunk is materialized this cycle.
    ///
    /// Purely informational: hosts and debug overlays can distinguish chunks
    /// kept alive by the scroll buffer from those pre-warmed by the lookahead
    /// or pinned by focus.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct VisibilityReason: u8 {
        /// Extent intersects the buffered viewport window.
        const BUFFER    = 0b0000_0001;
        /// Extent intersects the forward-looking prefetch window.
        const LOOKAHEAD = 0b0000_0010;
        /// Chunk contains the focused item and is forced visible.
        const FOCUS     = 0b0000_0100;
    }
}

/// Tuning for the visibility decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityParams {
    /// Buffer zone above and below the viewport, in viewport heights.
    ///
    /// Chunks inside the buffer stay mounted, masking pop-in during ordinary
    /// scrolling.
    pub buffer_factor: f64,
    /// Forward-looking prefetch distance below the viewport, in viewport
    /// heights.
    ///
    /// Chunks in this window are materialized before they reach the buffer so
    /// cover images start loading early. Meaningful values exceed
    /// `buffer_factor`; smaller values are subsumed by the buffer.
    pub lookahead_factor: f64,
}

impl Default for VisibilityParams {
    fn default() -> Self {
        Self {
            buffer_factor: 2.0,
            lookahead_factor: 3.0,
        }
    }
}

/// Visible chunk indices with their reasons, ascending by index.
pub type VisibleChunks = SmallVec<[(usize, VisibilityReason); 16]>;

/// Decides which chunks must be materialized for the current viewport.
///
/// A chunk is visible when its vertical extent intersects
/// `scroll_offset - buffer .. scroll_offset + viewport + buffer`, or the
/// forward prefetch window, or when it is `forced` (the focused item's chunk,
/// which must stay mounted regardless of scroll position). A `forced` index
/// out of range is ignored.
#[must_use]
pub fn compute_visible_chunks(
    chunks: &[Chunk],
    scroll_offset: f64,
    viewport_extent: f64,
    params: &VisibilityParams,
    forced: Option<usize>,
) -> VisibleChunks {
    let buffer = viewport_extent * params.buffer_factor;
    let buffered = (scroll_offset - buffer)..(scroll_offset + viewport_extent + buffer);
    let lookahead = (scroll_offset + viewport_extent)
        ..(scroll_offset + viewport_extent + viewport_extent * params.lookahead_factor);

    let mut visible = VisibleChunks::new();
    for (index, chunk) in chunks.iter().enumerate() {
        let mut reason = VisibilityReason::empty();
        if chunk.intersects(&buffered) {
            reason |= VisibilityReason::BUFFER;
        }
        if chunk.intersects(&lookahead) {
            reason |= VisibilityReason::LOOKAHEAD;
        }
        if forced == Some(index) {
            reason |= VisibilityReason::FOCUS;
        }
        if !reason.is_empty() {
            visible.push((index, reason));
        }
    }
    visible
}
