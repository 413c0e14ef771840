// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport controller: scroll state, lazy visibility, and focus navigation.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use shelfside_layout::LayoutItem;

use crate::chunk::{Chunk, build_chunks};
use crate::visibility::{VisibilityParams, VisibleChunks, compute_visible_chunks};

/// Vertical geometry retained per item for focus scrolling.
#[derive(Clone, Copy, Debug)]
struct ItemSpan {
    top: f64,
    bottom: f64,
}

/// Controller owning the ephemeral viewport state of one shelf view.
///
/// Wraps the chunk list, scroll offset, viewport extent, focused item, and
/// the cached visible set. All of this is UI session state: it has no
/// persistence and resets when the view remounts.
///
/// Mutations (scroll, resize, item changes, focus moves) only mark the state
/// dirty; the visible set is recomputed lazily on the next read, so a burst
/// of mutations within one event cycle costs a single recomputation.
///
/// Recomputation is idempotent and safe to call redundantly; there is a
/// single logical writer (the UI thread) and the item list is never mutated
/// during a pass.
#[derive(Clone, Debug)]
pub struct ShelfViewport {
    chunks: Vec<Chunk>,
    spans: Vec<ItemSpan>,
    ids: Vec<String>,
    index_of: HashMap<String, usize>,
    chunk_size: usize,
    params: VisibilityParams,
    scroll_offset: f64,
    viewport_extent: f64,
    focus: Option<String>,
    visible: VisibleChunks,
    dirty: bool,
}

impl ShelfViewport {
    /// Creates an empty controller.
    ///
    /// `chunk_size` of zero is treated as one (see
    /// [`crate::DEFAULT_CHUNK_SIZE`] for the conventional value).
    #[must_use]
    pub fn new(viewport_extent: f64, chunk_size: usize, params: VisibilityParams) -> Self {
        Self {
            chunks: Vec::new(),
            spans: Vec::new(),
            ids: Vec::new(),
            index_of: HashMap::new(),
            chunk_size: chunk_size.max(1),
            params,
            scroll_offset: 0.0,
            viewport_extent,
            focus: None,
            visible: VisibleChunks::new(),
            dirty: true,
        }
    }

    /// Replaces the item list, rebuilding chunks and the id index.
    ///
    /// The focused id is kept even if it no longer resolves to an item; a
    /// stale focus simply stops forcing its chunk until the id reappears.
    pub fn set_items(&mut self, items: &[LayoutItem]) {
        self.chunks = build_chunks(items, self.chunk_size);
        self.spans = items
            .iter()
            .map(|i| ItemSpan {
                top: i.y,
                bottom: i.y + i.h,
            })
            .collect();
        self.ids = items.iter().map(|i| i.id.clone()).collect();
        self.index_of = self
            .ids
            .iter()
            .enumerate()
            .map(|(index, id)| (id.clone(), index))
            .collect();
        self.dirty = true;
    }

    /// Number of items currently tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when no items are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Records a new scroll offset (from a passive scroll listener).
    pub fn set_scroll_offset(&mut self, offset: f64) {
        if self.scroll_offset != offset {
            self.scroll_offset = offset;
            self.dirty = true;
        }
    }

    /// Current viewport extent (visible height).
    #[must_use]
    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// Records a new viewport extent (from a resize observation).
    pub fn set_viewport_extent(&mut self, extent: f64) {
        if self.viewport_extent != extent {
            self.viewport_extent = extent;
            self.dirty = true;
        }
    }

    /// Total scrollable extent, derived from chunk bounds alone.
    ///
    /// Identical whether one chunk or every chunk is materialized; toggling
    /// visibility can never change the reported content height.
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        self.chunks
            .iter()
            .fold(0.0_f64, |acc, c| acc.max(c.end_y))
    }

    /// The chunk list, for placeholder geometry.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// A single chunk, if `index` is in range.
    #[must_use]
    pub fn chunk(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// The chunks to materialize this cycle, with their reasons.
    ///
    /// Lazily recomputed when scroll, viewport, items, or focus changed since
    /// the last read.
    pub fn visible_chunks(&mut self) -> &VisibleChunks {
        self.ensure_visible();
        &self.visible
    }

    /// Returns `true` if the chunk at `index` must be materialized.
    pub fn is_chunk_visible(&mut self, index: usize) -> bool {
        self.ensure_visible();
        self.visible.iter().any(|(i, _)| *i == index)
    }

    /// The currently focused item id, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    /// Focuses the given id.
    ///
    /// Ids that do not resolve to a current item are recorded anyway and
    /// tolerated: the force-visible step is skipped until the id reappears
    /// in a later item list.
    pub fn set_focus(&mut self, id: &str) {
        if self.focus.as_deref() != Some(id) {
            self.focus = Some(id.to_string());
            self.dirty = true;
        }
    }

    /// Clears focus.
    pub fn clear_focus(&mut self) {
        if self.focus.take().is_some() {
            self.dirty = true;
        }
    }

    /// Moves focus to the next item in layout order, saturating at the end.
    ///
    /// With no current (or a stale) focus, the first item is focused.
    /// Returns the newly focused id, or `None` when there are no items.
    pub fn focus_next(&mut self) -> Option<&str> {
        let next = match self.focused_index() {
            Some(index) => (index + 1).min(self.ids.len().saturating_sub(1)),
            None => 0,
        };
        self.focus_index(next)
    }

    /// Moves focus to the previous item in layout order, saturating at the
    /// start.
    ///
    /// With no current (or a stale) focus, the last item is focused.
    /// Returns the newly focused id, or `None` when there are no items.
    pub fn focus_prev(&mut self) -> Option<&str> {
        let prev = match self.focused_index() {
            Some(index) => index.saturating_sub(1),
            None => self.ids.len().saturating_sub(1),
        };
        self.focus_index(prev)
    }

    /// Scrolls just enough to bring the focused item fully into view.
    ///
    /// Minimal-scroll semantics: an item above the window aligns its top to
    /// the window top; an item below aligns its bottom to the window bottom;
    /// an item already fully visible leaves the offset untouched. Returns the
    /// new offset when it changed. A stale or missing focus does nothing.
    pub fn scroll_to_reveal_focus(&mut self) -> Option<f64> {
        let span = self.spans[self.focused_index()?];
        let top = self.scroll_offset;
        let bottom = top + self.viewport_extent;
        let target = if span.top < top {
            span.top
        } else if span.bottom > bottom {
            // An item taller than the window aligns its top instead, so
            // repeated reveals stay put.
            (span.bottom - self.viewport_extent).min(span.top)
        } else {
            return None;
        };
        if target == self.scroll_offset {
            return None;
        }
        self.set_scroll_offset(target);
        Some(target)
    }

    /// Index of the chunk containing the focused item, if the focus resolves.
    #[must_use]
    pub fn focused_chunk(&self) -> Option<usize> {
        self.focused_index().map(|i| i / self.chunk_size)
    }

    /// Snapshot of the controller state for debugging and inspection.
    pub fn debug_info(&mut self) -> ShelfViewportDebugInfo {
        self.ensure_visible();
        ShelfViewportDebugInfo {
            item_count: self.ids.len(),
            chunk_count: self.chunks.len(),
            chunk_size: self.chunk_size,
            scroll_offset: self.scroll_offset,
            viewport_extent: self.viewport_extent,
            total_extent: self.total_extent(),
            visible: self.visible.iter().map(|(i, _)| *i).collect(),
            focus: self.focus.clone(),
        }
    }

    fn focused_index(&self) -> Option<usize> {
        self.index_of.get(self.focus.as_deref()?).copied()
    }

    fn focus_index(&mut self, index: usize) -> Option<&str> {
        let id = self.ids.get(index)?;
        if self.focus.as_deref() != Some(id.as_str()) {
            self.focus = Some(id.clone());
            self.dirty = true;
        }
        self.focus.as_deref()
    }

    fn ensure_visible(&mut self) {
        if self.dirty {
            self.visible = compute_visible_chunks(
                &self.chunks,
                self.scroll_offset,
                self.viewport_extent,
                &self.params,
                self.focused_chunk(),
            );
            self.dirty = false;
        }
    }
}

/// Debug snapshot of a [`ShelfViewport`].
#[derive(Clone, Debug)]
pub struct ShelfViewportDebugInfo {
    /// Number of tracked items.
    pub item_count: usize,
    /// Number of chunks.
    pub chunk_count: usize,
    /// Configured maximum items per chunk.
    pub chunk_size: usize,
    /// Current scroll offset.
    pub scroll_offset: f64,
    /// Current viewport extent.
    pub viewport_extent: f64,
    /// Total scrollable extent.
    pub total_extent: f64,
    /// Indices of currently materialized chunks.
    pub visible: Vec<usize>,
    /// Focused item id, if any (possibly stale).
    pub focus: Option<String>,
}
